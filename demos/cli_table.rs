//! CLI table demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use bjtable::{Game, GameOptions, GamePhase, Ledger, LocalShoe, MemoryLedger};

type DemoGame = Game<LocalShoe, MemoryLedger>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    println!("Blackjack table demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let shoe = LocalShoe::new(options.decks, seed);
    let mut game = Game::new(options, shoe, MemoryLedger::new());

    game.sign_in("demo-player").await?;

    loop {
        let balance = game.state().balance;
        if balance == 0 {
            println!("You are out of chips. Game over.");
            break;
        }

        let Some(bet) = prompt_u64(&format!("Bet amount (1-{balance}, 0 to quit): ")) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(bet).await {
            println!("Bet error: {err}");
            game.reset();
            continue;
        }

        while game.phase() == GamePhase::Playing {
            print_table(&game);

            match prompt_line("Action (h/s/q): ").as_str() {
                "h" | "hit" => match game.hit().await {
                    Ok(card) => println!("You drew {}", card.code),
                    Err(err) => {
                        println!("Action error: {err}");
                        break;
                    }
                },
                "s" | "stand" => {
                    if let Err(err) = game.stand().await {
                        println!("Action error: {err}");
                        break;
                    }
                }
                "q" | "quit" => return Ok(()),
                _ => println!("Unknown action."),
            }
        }

        if game.phase() == GamePhase::GameOver {
            if let Some(summary) = game.last_round() {
                println!(
                    "{} (you {}, dealer {})  [balance {}]",
                    summary.message, summary.player_value, summary.dealer_value, summary.balance
                );
            }
        }

        game.reset();
    }

    println!("Leaderboard:");
    for row in game.ledger_mut().leaderboard().await? {
        println!("  {}  {}", row.name, row.balance);
    }

    Ok(())
}

fn print_table(game: &DemoGame) {
    let state = game.state();

    let dealer_codes = state.dealer_hand.codes();
    let shown: Vec<&str> = dealer_codes
        .iter()
        .enumerate()
        .map(|(index, code)| {
            if index == 0 || state.dealer_card_visible() {
                code.as_str()
            } else {
                "??"
            }
        })
        .collect();
    println!(
        "Dealer: {}  (showing {})",
        shown.join(" "),
        state.dealer_hand.visible_value().unwrap_or(0)
    );

    println!(
        "You:    {}  (total {})",
        state.player_hand.codes().join(" "),
        state.player_hand.value().unwrap_or(0)
    );
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_lowercase()
}

fn prompt_u64(prompt: &str) -> Option<u64> {
    loop {
        let line = prompt_line(prompt);
        if line == "q" || line == "quit" {
            return None;
        }
        match line.parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Enter a number."),
        }
    }
}
