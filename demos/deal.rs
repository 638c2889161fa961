//! Deals a few poker hands from a seeded deck.
//!
//! Run with `cargo run --example deal -- [seed]`. Set `RUST_LOG=carddeck=trace`
//! to see the deck's own log output.

use carddeck::{DEFAULT_SEED, DealError, Deck};

const PLAYERS: usize = 4;
const HAND_SIZE: usize = 5;
const ROUNDS: usize = 4;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    println!("Dealing with seed {seed}");

    let mut deck = Deck::new(seed);
    deck.shuffle(false);

    for round in 1..=ROUNDS {
        println!("Round {round} ({} cards left)", deck.count_cards());
        for player in 1..=PLAYERS {
            let hand = match deck.deal_n_cards(HAND_SIZE) {
                Ok(hand) => hand,
                Err(err @ DealError::InsufficientCards { .. }) => {
                    println!("  {err}; reshuffling");
                    deck.shuffle(true);
                    match deck.deal_n_cards(HAND_SIZE) {
                        Ok(hand) => hand,
                        Err(err) => {
                            println!("  {err}");
                            return;
                        }
                    }
                }
                Err(err) => {
                    println!("  {err}");
                    return;
                }
            };
            let names: Vec<String> = hand.iter().map(ToString::to_string).collect();
            println!("  Player {player}: {}", names.join(", "));
        }
    }

    match deck.deal_random_card() {
        Ok(card) => println!("Burned {card} at random"),
        Err(err) => println!("{err}"),
    }

    println!("Remaining deck:");
    deck.print();
}
