//! Check a few e-mail addresses against a filter.
//!
//! Run with `RUST_LOG=debug` to see the chosen filter parameters.
use strider::BloomFilter;
use tracing_subscriber::EnvFilter;

fn main() -> strider::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut bf = BloomFilter::with_rate(1000, 0.01)?;

    for email in ["user1@example.com", "user2@example.com", "user3@example.com"] {
        bf.insert(email);
    }

    for email in ["user1@example.com", "user4@example.com"] {
        if bf.contains(email) {
            println!("Probably contains: {email}");
        } else {
            println!("Definitely does not contain: {email}");
        }
    }
    Ok(())
}
