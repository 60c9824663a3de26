// Interactive bcrypt demo: hash a password, then check a second one against it.

use bcrypt_hash::{verify, BCrypt, Version, DEFAULT_COST};
use clap::Parser;
use rpassword::read_password;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "bcrypt_hash", about = "Hash a password with bcrypt and verify it")]
struct Cli {
    /// Cost factor (log2 of the key-schedule rounds), 4 to 31
    #[arg(short, long, default_value_t = DEFAULT_COST)]
    cost: u32,

    /// Version tag written into the hash: 2, 2a, 2b, 2x or 2y
    #[arg(long, default_value = "2b")]
    variant: Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let bcrypt = BCrypt::new(cli.cost)?.with_version(cli.variant);

    // Read password securely (without displaying it)
    print!("Enter password to hash: ");
    io::stdout().flush()?;
    let password = read_password()?;

    let hashed = bcrypt.hash(&password)?;

    println!("\nHashed password: {}", hashed);

    print!("\nEnter password to verify: ");
    io::stdout().flush()?;
    let verify_password = read_password()?;

    let is_valid = verify(&verify_password, &hashed)?;
    println!("\nPassword verification: {}", if is_valid { "success" } else { "failed" });

    Ok(())
}
