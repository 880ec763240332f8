use num_bigint::BigUint;
use shamir_recover::input::{ShareRecord, TestCase};
use shamir_recover::shamir::Reconstructor;

/// Reconstruct the secret of the line `f(x) = 2x + 1` from shares written
/// in three different bases, then show that a malformed share is reported
/// instead of producing a value.
fn main() {
    let reconstructor = Reconstructor::default();

    let mut case = TestCase::from_json_str(
        r#"{
            "keys": { "n": 3, "k": 2 },
            "1": { "base": "10", "value": "3" },
            "2": { "base": "2", "value": "101" },
            "3": { "base": "16", "value": "7" }
        }"#,
    )
    .expect("inline test case should parse");

    let secret = reconstructor
        .reconstruct(&case)
        .expect("reconstruction should succeed");
    assert_eq!(secret, BigUint::from(1u32));
    println!("Reconstructed secret: {secret}");

    case.shares
        .insert("4".to_owned(), ShareRecord::new(10u32, "G"));
    let err = reconstructor
        .reconstruct(&case)
        .expect_err("a malformed share must not yield a secret");
    println!("Rejected malformed input: {err}");
}
