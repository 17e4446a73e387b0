//! Command-line front end for the five-card trick.
//!
//! Usage:
//!   cardtrick encode A_C 4_C 7_H 2_S K_D
//!   cardtrick decode A_C 7_H 2_S K_D
//!   cardtrick demo --seed 7
//!   cardtrick verify --policy first-found
//!
//! Logging is controlled with `RUST_LOG` (default `cardtrick=info`).

use anyhow::{bail, Context, Result};
use cardtrick::trick::{cards::Card, decode, encode_with_policy, verify, SelectionPolicy};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Five-card mind-reading trick")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide one of five cards and arrange the other four
    Encode {
        #[arg(num_args = 5, required = true)]
        cards: Vec<Card>,

        #[arg(short, long, default_value_t = SelectionPolicy::MaxValue)]
        policy: SelectionPolicy,

        #[arg(long)]
        json: bool,
    },
    /// Name the hidden card from the four revealed cards, in order
    Decode {
        first: Card,

        #[arg(num_args = 3, required = true)]
        arrangement: Vec<Card>,

        #[arg(long)]
        json: bool,
    },
    /// Deal a random hand and play both roles
    Demo {
        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(short, long, default_value_t = SelectionPolicy::MaxValue)]
        policy: SelectionPolicy,

        #[arg(long)]
        json: bool,
    },
    /// Check the trick on every possible hand
    Verify {
        #[arg(short, long, default_value_t = SelectionPolicy::MaxValue)]
        policy: SelectionPolicy,
    },
    /// Print the deck in index order
    Deck,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardtrick=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match Args::parse().command {
        Command::Encode {
            cards,
            policy,
            json,
        } => {
            let encoding = encode_with_policy(&cards, policy).context("encoding failed")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&encoding)?);
            } else {
                println!("Hidden card: {}", encoding.hidden_card);
                println!("Encoding value: {}", encoding.encoding_value);
                for (position, card) in encoding.revealed().iter().enumerate() {
                    println!("Card {}: {}", position + 1, card);
                }
            }
        }
        Command::Decode {
            first,
            arrangement,
            json,
        } => {
            let hidden = decode(first, &arrangement).context("decoding failed")?;
            if json {
                println!("{}", serde_json::json!({ "hidden_card": hidden }));
            } else {
                println!("The hidden card is: {} ({})", hidden, hidden.long_name());
            }
        }
        Command::Demo { seed, policy, json } => run_demo(seed, policy, json)?,
        Command::Verify { policy } => {
            info!(%policy, "checking every five-card hand");
            let report = verify::exhaustive(policy).context("verification aborted")?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !report.is_success() {
                bail!("{} hands failed to round-trip", report.round_trip_failures);
            }
        }
        Command::Deck => {
            for card in Card::all_cards() {
                println!("{:>2}  {:<5} {}", card.index(), card.to_string(), card.long_name());
            }
        }
    }

    Ok(())
}

fn run_demo(seed: Option<u64>, policy: SelectionPolicy, json: bool) -> Result<()> {
    let mut deck = Card::all_cards();
    match seed {
        Some(seed) => deck.shuffle(&mut StdRng::seed_from_u64(seed)),
        None => deck.shuffle(&mut rand::rng()),
    }
    let dealt = &deck[..5];
    info!(?seed, "dealt {} cards", dealt.len());

    let encoding = encode_with_policy(dealt, policy).context("assistant failed")?;
    let decoded = decode(encoding.first_card, &encoding.arrangement).context("magician failed")?;
    let success = decoded == encoding.hidden_card;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "dealt": dealt,
                "encoding": encoding,
                "decoded": decoded,
                "success": success,
            }))?
        );
    } else {
        let tokens: Vec<String> = dealt.iter().map(Card::to_string).collect();
        println!("Dealt: {}", tokens.join(", "));
        println!(
            "Assistant hides {} and lays down {}",
            encoding.hidden_card,
            encoding
                .revealed()
                .iter()
                .map(Card::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!(
            "First card {} fixes the suit ({}), the order encodes {}",
            encoding.first_card,
            encoding.first_card.suit.name(),
            encoding.encoding_value
        );
        println!("Magician names: {}", decoded);
    }

    if !success {
        bail!(
            "magician named {} but {} was hidden",
            decoded,
            encoding.hidden_card
        );
    }
    Ok(())
}
