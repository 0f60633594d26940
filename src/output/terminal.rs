// Colored terminal output for association and accuracy results.
//
// All printing lives here; main.rs only decides what to show.

use colored::Colorize;

use crate::accuracy::{accuracy_gap, GroupGrade};
use crate::association::{SetName, WeatReport, WeatTest};

use super::{format_percent, format_signed, truncate_chars};

/// Which target set the A attributes lean toward, relative to B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leaning {
    TowardX,
    TowardY,
    Neutral,
}

impl Leaning {
    /// Classify a statistic. Values within `1e-12` of zero count as neutral.
    pub fn from_statistic(statistic: f64) -> Self {
        match statistic {
            s if s > 1e-12 => Leaning::TowardX,
            s if s < -1e-12 => Leaning::TowardY,
            _ => Leaning::Neutral,
        }
    }
}

/// Display the statistic with its per-word breakdown.
pub fn display_weat_report(test: &WeatTest, report: &WeatReport, precision: usize) {
    let labels = &test.labels;

    println!("\n{}", "=== Word Embedding Association Test ===".bold());
    println!();
    for set in [SetName::X, SetName::Y, SetName::A, SetName::B] {
        println!(
            "  {} {:<32} {}",
            format!("{set}:").bold(),
            labels.label(set),
            test.set(set).join(", ").dimmed()
        );
    }

    println!(
        "\n  {:<20} {:>4}  {:>12}",
        "Word".dimmed(),
        "Set".dimmed(),
        "s(w, X, Y)".dimmed()
    );
    println!("  {}", "-".repeat(40).dimmed());

    for assoc in &report.associations {
        let score = format_signed(assoc.score, precision);
        let colored_score = if assoc.score >= 0.0 {
            score.cyan()
        } else {
            score.magenta()
        };
        println!(
            "  {:<20} {:>4}  {:>12}",
            truncate_chars(&assoc.word, 20),
            assoc.set.as_str(),
            colored_score
        );
    }

    println!();
    println!("  Sum over A: {}", format_signed(report.sum_a, precision));
    println!("  Sum over B: {}", format_signed(report.sum_b, precision));
    println!(
        "  {} {}",
        "WEAT statistic:".bold(),
        format_signed(report.statistic, precision).bold()
    );

    let summary = match Leaning::from_statistic(report.statistic) {
        Leaning::TowardX => format!(
            "{} is closer to {} (and {} to {}) on balance.",
            labels.label(SetName::A),
            labels.label(SetName::X),
            labels.label(SetName::B),
            labels.label(SetName::Y)
        ),
        Leaning::TowardY => format!(
            "{} is closer to {} (and {} to {}) on balance.",
            labels.label(SetName::A),
            labels.label(SetName::Y),
            labels.label(SetName::B),
            labels.label(SetName::X)
        ),
        Leaning::Neutral => "No differential association between the attribute sets.".to_string(),
    };
    println!("  {}", summary.dimmed());
    println!(
        "  {}",
        "(Unnormalized sum over attribute words; not an effect size.)".dimmed()
    );
}

/// Display each group's accuracy, its wrong answers, and the spread between groups.
pub fn display_group_grades(grades: &[GroupGrade], precision: usize) {
    println!("\n{}", "=== Response Accuracy ===".bold());
    println!();

    for entry in grades {
        let grade = &entry.grade;
        let accuracy = format!("{:.precision$}", grade.accuracy);
        let colored_accuracy = if grade.mismatches.is_empty() {
            accuracy.green()
        } else if grade.accuracy >= 0.5 {
            accuracy.yellow()
        } else {
            accuracy.red()
        };

        println!(
            "  {:<16} {}  ({}/{} correct, {})",
            entry.group.bold(),
            colored_accuracy,
            grade.correct,
            grade.total,
            format_percent(grade.accuracy)
        );

        for miss in &grade.mismatches {
            println!(
                "      {} expected {:?}, got {:?}",
                truncate_chars(&miss.question, 48).dimmed(),
                miss.expected,
                miss.given
            );
        }
    }

    if let Some(gap) = accuracy_gap(grades) {
        println!();
        println!(
            "  Accuracy gap between groups: {}",
            format!("{gap:.precision$}").bold()
        );
    }
}
