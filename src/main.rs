use std::io::Write;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use rsa_text::rsa::bigint::from_u64;
use rsa_text::rsa::{generate_keypair, KeyGenConfig, RandomPrimeSource, RsaKeyPair};
use rsa_text::util::prompt_line;

#[derive(Parser)]
#[command(author, version, about)]
struct Opt {
    /// Text to encrypt, read from stdin when omitted
    text: Option<String>,

    /// Enable debug
    #[arg(long)]
    debug: bool,

    /// Smallest prime candidate
    #[arg(long, default_value_t = 100)]
    min_prime: u64,

    /// Largest prime candidate
    #[arg(long, default_value_t = 1000)]
    max_prime: u64,

    /// Draws allowed before prime generation gives up
    #[arg(long, default_value_t = 10_000)]
    max_attempts: u32,

    /// Use this prime for p instead of drawing one
    #[arg(short, long, requires = "q")]
    p: Option<u64>,

    /// Use this prime for q instead of drawing one
    #[arg(short, long, requires = "p")]
    q: Option<u64>,

    /// Seed for reproducible prime draws
    #[arg(long)]
    seed: Option<u64>,

    /// Keep p == q if both draws land on the same prime
    #[arg(long)]
    allow_equal_primes: bool,

    /// Refuse characters whose code is not below the modulus
    #[arg(long)]
    strict: bool,
}

impl Opt {
    fn config(&self) -> KeyGenConfig {
        KeyGenConfig::default()
            .with_prime_range(self.min_prime, self.max_prime)
            .with_max_attempts(self.max_attempts)
            .with_distinct_primes(!self.allow_equal_primes)
    }

    fn keypair(&self) -> anyhow::Result<RsaKeyPair> {
        if let (Some(p), Some(q)) = (self.p, self.q) {
            return RsaKeyPair::from_primes(from_u64(p), from_u64(q))
                .context("invalid fixed primes");
        }

        let config = self.config();
        let keypair = match self.seed {
            Some(seed) => {
                let rng = StdRng::seed_from_u64(seed);
                generate_keypair(&mut RandomPrimeSource::new(rng, config.max_attempts), &config)
            }
            None => {
                let rng = thread_rng();
                generate_keypair(&mut RandomPrimeSource::new(rng, config.max_attempts), &config)
            }
        };
        keypair.context("key generation failed")
    }
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::parse();
    init_log(opt.debug);

    let input = match opt.text.clone() {
        Some(text) => text,
        None => prompt_line().context("failed to read input")?,
    };

    let keypair = opt.keypair()?;
    let transcript = rsa_text::convert(&input, &keypair, opt.strict)?;
    println!("{}", transcript);

    if !transcript.round_trips() {
        log::warn!("decrypted text differs from the input");
    }

    Ok(())
}

fn init_log(debug: bool) {
    let level = match debug {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {}: {}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.args()
            )
        })
        .init();
}
