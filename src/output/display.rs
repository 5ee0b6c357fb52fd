//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AuditResult, CheckResult};
use colored::Colorize;

/// Print the result of checking one equation
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Checking: {}", result.input.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if let Some((lhs, rhs)) = result.sides {
        println!("  Left side:   {lhs}");
        println!("  Right side:  {rhs}");
    }

    println!();
    if result.is_valid() {
        println!("{}", "✅ Valid equation".green().bold());
    } else {
        println!("{}", format!("❌ {}", result.code).red().bold());
    }
}

/// Print the result of a corpus audit
pub fn print_audit_result(result: &AuditResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CORPUS AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Entries checked:  {}", result.total);
    println!(
        "   Valid targets:    {}",
        format!("{}", result.valid).green().bold()
    );
    println!(
        "   Rejected:         {}",
        if result.rejected.is_empty() {
            "0".green()
        } else {
            format!("{}", result.rejected.len()).red()
        }
    );
    println!("   Time taken:       {:.3}s", result.duration.as_secs_f64());

    if result.total > 0 {
        println!("\n📈 {}", "Verdicts:".bright_cyan().bold());
        let mut counts: Vec<_> = result.code_counts.iter().collect();
        counts.sort_by_key(|&(_, &count)| std::cmp::Reverse(count));
        for (code, &count) in counts {
            let pct = count as f64 / result.total as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 30);
            println!("   {bar} {count:5} ({pct:5.1}%)  {code}");
        }
    }

    if !result.rejected.is_empty() {
        println!("\n⚠️  {}", "Rejected entries:".yellow().bold());
        for entry in &result.rejected {
            println!(
                "   line {:>5}: {:<12} {}",
                entry.line,
                entry.text,
                entry.code.to_string().bright_black()
            );
        }
    }

    if !result.duplicates.is_empty() {
        println!("\n🔁 {}", "Duplicates:".yellow().bold());
        for (text, count) in &result.duplicates {
            println!("   {text} × {count}");
        }
    }

    if result.is_clean() {
        println!("\n{}", "✅ Corpus is clean".green().bold());
    }
}
