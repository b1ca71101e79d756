use crate::cli::commands::{resolve_params, to_raw_punches};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::MIN_LUNCH_BREAK_MINUTES;
use crate::core::logic::Engine;
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{GREY, RESET, color_for_surplus, colorize_in_out};
use crate::utils::formatting::{bold, format_duration};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        punches,
        target,
        now,
        json,
        details,
    } = cmd
    {
        let params = resolve_params(cfg, target.as_ref(), now.as_ref())?;
        let raw = to_raw_punches(punches);

        match Engine::compute(&raw, &params) {
            None => {
                // A valid empty-day state, not an error.
                warning("No usable punch data — nothing to compute.");
            }
            Some(summary) => {
                if *json {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                } else {
                    render_summary(&summary, *details);
                }
            }
        }
    }
    Ok(())
}

fn render_summary(summary: &DaySummary, details: bool) {
    header("Timesheet summary");

    if details {
        print_punch_table(summary);
    }

    for (idx, p) in summary.timeline.periods.iter().enumerate() {
        println!(
            "Period {}: {} - {} = {}",
            idx + 1,
            p.start,
            p.end,
            format_duration(p.duration_minutes)
        );
    }

    if let Some(open) = &summary.timeline.open_period {
        println!(
            "Current period: {} - {} = {} {}(live){}",
            open.start,
            open.end,
            format_duration(open.duration_minutes),
            GREY,
            RESET
        );
    }

    match &summary.lunch_break {
        Some(b) => println!(
            "🍽️ Lunch break: detected {} - {} ({})",
            b.start,
            b.end,
            format_duration(b.duration_minutes)
        ),
        None if summary.lunch_adjustment_minutes > 0 => println!(
            "🍽️ Lunch break: not detected - minimum {} assumed",
            format_duration(summary.lunch_adjustment_minutes)
        ),
        None => {}
    }

    println!(
        "🕐 Total worked: {}",
        bold(&format_duration(summary.timeline.total_worked_minutes))
    );

    let surplus = summary.surplus_minutes;
    if surplus > 0 {
        println!(
            "⏱️ Surplus: {}+{}{}",
            color_for_surplus(surplus),
            format_duration(surplus),
            RESET
        );
    } else if surplus < 0 {
        println!(
            "⏱️ Deficit: {}{}{}",
            color_for_surplus(surplus),
            format_duration(surplus),
            RESET
        );
    }

    print_projection(summary);

    if let Some(open) = &summary.timeline.open_period {
        println!("🔄 Currently clocked in since {}", open.start);
    }

    println!(
        "{}Target: {} | Min. lunch: {}{}",
        GREY,
        format_duration(summary.target_minutes),
        format_duration(MIN_LUNCH_BREAK_MINUTES),
        RESET
    );
}

fn print_projection(summary: &DaySummary) {
    use crate::models::projection::Projection;

    match &summary.projection {
        Projection::Exceeded => {
            println!("✅ Daily work target already exceeded!");
        }
        Projection::Completed => {
            println!("🎉 Daily work target completed!");
        }
        Projection::ClockedIn {
            target_clock_out,
            remaining_minutes,
        } => {
            println!(
                "🎯 Clock out at {} to reach {}",
                target_clock_out,
                format_duration(summary.target_minutes)
            );
            println!(
                "{}Remaining: {} of work{}",
                GREY,
                format_duration(*remaining_minutes),
                RESET
            );
        }
        Projection::ClockedOut { remaining_minutes } => {
            println!(
                "⏳ Still {} of work remaining",
                format_duration(*remaining_minutes)
            );
        }
    }
}

fn print_punch_table(summary: &DaySummary) {
    let mut table = Table::new(vec![
        Column::new("Punch", 6),
        Column::new("Time", 6),
        Column::new("Kind", 6),
        Column::new("Source pos", 10),
    ]);

    for (idx, p) in summary.punches.iter().enumerate() {
        let is_in = idx % 2 == 0;
        table.add_row(vec![
            (idx + 1).to_string(),
            p.time.to_string(),
            colorize_in_out(if is_in { "in" } else { "out" }, is_in),
            p.position.to_string(),
        ]);
    }

    println!("{}", table.render());
}
