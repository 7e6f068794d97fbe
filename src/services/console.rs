use colored::Colorize;

use crate::domain::{AttemptRecord, GameCatalog};
use crate::skills::{Recommendation, SkillAssessment, SkillReport};

const BAR_WIDTH: usize = 25;

pub fn print_attempt(record: &AttemptRecord) {
    println!(
        "{} {} {:<16} score {:>3}  {:>4}s",
        record.created_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed(),
        format!("#{}", record.id).dimmed(),
        record.game_id,
        record.score.to_string().bold(),
        record.elapsed_seconds
    );
}

pub fn print_history(actor_id: &str, attempts: &[AttemptRecord]) {
    if attempts.is_empty() {
        println!("No attempts recorded for {}", actor_id.bold());
        return;
    }

    println!("{} attempts for {}", attempts.len(), actor_id.bold());
    for attempt in attempts {
        print_attempt(attempt);
    }
}

pub fn print_report(actor_id: &str, report: &SkillReport) {
    println!("Skill radar for {}", actor_id.bold());
    for (category, score) in report.profile.iter() {
        println!("  {:<11} {} {:>3}", category.as_str(), score_bar(score), score);
    }

    println!();
    println!("  Career match: {}", report.career_title.green().bold());
    println!("  Talent type:  {}", report.talent_type.cyan());

    if !report.profile.is_blank() {
        let top: Vec<String> = report
            .top_skills
            .iter()
            .map(|s| format!("{} ({})", s.category, s.score))
            .collect();
        println!("  Top skills:   {}", top.join(", "));
    }
}

pub fn print_recommendation(actor_id: &str, recommendation: &Recommendation, catalog: &GameCatalog) {
    let title = catalog
        .get(&recommendation.recommended_game_id)
        .map(|g| g.title.as_str())
        .unwrap_or(recommendation.recommended_game_id.as_str());

    match recommendation.weakest_category {
        SkillAssessment::NotYetDetermined => {
            println!("{} has not played yet. Start the journey with {}", actor_id.bold(), title.green().bold());
        }
        SkillAssessment::Category(weakest) => {
            println!("Strongest skill: {}", recommendation.dominant_category.to_string().green());
            println!("Weakest skill:   {}", weakest.as_str().yellow());
            println!("Boost {} with {}", weakest, title.green().bold());
        }
    }
}

pub fn print_games(catalog: &GameCatalog) {
    for (idx, game) in catalog.iter().enumerate() {
        let weights: Vec<String> = game
            .category_weights
            .iter()
            .map(|(category, weight)| format!("{category} {weight:.1}"))
            .collect();
        println!(
            "{:>2}. {:<16} {:<16} {}",
            idx + 1,
            game.game_id.bold(),
            game.title,
            weights.join(", ").dimmed()
        );
    }
}

fn score_bar(score: u8) -> String {
    let filled = usize::from(score) * BAR_WIDTH / 100;
    format!(
        "{}{}",
        "█".repeat(filled).blue(),
        "·".repeat(BAR_WIDTH - filled).dimmed()
    )
}
