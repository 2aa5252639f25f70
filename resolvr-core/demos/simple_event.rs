//! Simple event resolution example
//!
//! This example demonstrates creating a multiple-results event, placing bets,
//! proposing and challenging a result, and calculating payouts.

use anyhow::Result;
use resolvr_core::{utils::format_timestamp, EventConfig, EventParams, MultipleResultsEvent};

fn main() -> Result<()> {
    println!("🎯 Simple Event Resolution Example");
    println!("══════════════════════════════════\n");

    let oracle = "0x1111111111111111111111111111111111111111";
    let alice = "0x2222222222222222222222222222222222222222";
    let bob = "0x3333333333333333333333333333333333333333";

    // 1. Create a new event
    println!("1. Creating a new event...");
    let config = EventConfig {
        escrow_amount: 100,
        arbitration_length: 86_400,
        starting_threshold: 100,
        threshold_percent_increase: 10,
        arbitration_reward_percent: 10,
    };
    let params = EventParams {
        name: "Will it rain tomorrow in San Francisco?".to_string(),
        results: vec!["Yes, it will rain".to_string(), "No, it will not rain".to_string()],
        bet_start_time: 1_000,
        bet_end_time: 2_000,
        result_set_start_time: 2_000,
        result_set_end_time: 3_000,
        centralized_oracle: oracle.to_string(),
    };
    let mut event = MultipleResultsEvent::new(oracle, params, config)?;

    println!("   Address: {}", event.address);
    println!("   Question: {}", event.name);
    println!("   Outcomes: {:?}", event.results);
    println!("   Betting closes: {}", format_timestamp(event.bet_end_time));
    println!();

    // 2. Betting round
    println!("2. Placing bets...");
    event.bet(alice, 1, 70, 1_500)?;
    event.bet(bob, 2, 30, 1_600)?;
    println!("   Alice bets 70 on \"Yes\", Bob bets 30 on \"No\"");
    println!("   Total bets: {}", event.total_bets);
    println!();

    // 3. The oracle proposes "Yes" by staking the consensus threshold
    println!("3. Oracle proposes a result...");
    event.set_result(oracle, 1, 100, 2_100)?;
    println!("   Proposed: {}", event.results[event.current_result_index as usize]);
    println!("   Status: {}", event.status(2_200));
    println!();

    // 4. Bob challenges but falls short of the threshold
    println!("4. Bob challenges with 60 (threshold is 100)...");
    let outcome = event.vote(bob, 2, 60, 2_500)?;
    println!("   Accepted: {}, round advanced: {}", outcome.accepted, outcome.round_advanced);
    println!();

    // 5. The deadline passes and the result becomes final
    let deadline = event.current_arbitration_end_time;
    println!("5. Deadline {} passes unchallenged...", format_timestamp(deadline));
    println!("   Status: {}", event.status(deadline));
    println!();

    // 6. Payouts
    println!("6. Calculating winnings...");
    for (name, who) in [("Alice", alice), ("Bob", bob), ("Oracle", oracle)] {
        let winnings = event.calculate_winnings(who);
        println!(
            "   {name}: {} (bets {}, arbitration {})",
            winnings.total(),
            winnings.bet_tokens,
            winnings.arbitration_tokens
        );
    }

    let withdrawal = event.withdraw(alice, deadline)?;
    println!("\n   Alice withdraws {} tokens", withdrawal.winnings.total());

    Ok(())
}
