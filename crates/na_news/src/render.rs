//! Plain-text rendering and file export of a finished report.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use na_core::analysis::TOP_TOPICS_DISPLAYED;
use na_core::report::{audio_file_name, report_file_name};
use na_core::{Result, SentimentLabel};
use tracing::info;

use crate::manager::{Language, ReportOutcome};

const RULE: &str = "------------------------------------------------------------";

pub fn render_text(outcome: &ReportOutcome) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_report(&mut out, outcome);
    out
}

fn write_report(out: &mut String, outcome: &ReportOutcome) -> std::fmt::Result {
    let analysis = &outcome.analysis;
    let counts = &analysis.sentiment_counts;

    writeln!(out, "📰 {} news analysis", outcome.company)?;
    if let Some(cached_at) = outcome.cached_at {
        writeln!(out, "(cached data from {})", cached_at.format("%Y-%m-%d %H:%M:%S"))?;
    }
    writeln!(out, "{}", RULE)?;

    writeln!(out, "\n📊 Overall Analysis\n{}", outcome.overall_summary)?;
    if let Some(hindi) = &outcome.hindi_summary {
        writeln!(out, "\nHindi Summary\n{}", hindi)?;
        if outcome.translation_failed {
            writeln!(out, "(translation unavailable, showing English text)")?;
        }
    }

    writeln!(out, "\nSentiment Distribution")?;
    for label in SentimentLabel::ALL {
        writeln!(out, "  {:<9} {:>3}  ({:.0}%)", label.as_str(), counts.get(label), counts.percentage(label))?;
    }
    writeln!(
        out,
        "Average Sentiment: {} ({:.2})",
        analysis.average_label(),
        analysis.average_sentiment_score
    )?;

    writeln!(out, "\nCommon Topics Across Articles")?;
    let overlap = &analysis.topic_overlap.common_topics;
    if overlap.is_empty() {
        writeln!(out, "  No common topics found across all articles.")?;
    } else {
        writeln!(out, "  {}", overlap.as_slice().join(", "))?;
    }

    writeln!(out, "\nMost Frequent Topics")?;
    let frequent: Vec<String> = analysis
        .top_topics(TOP_TOPICS_DISPLAYED)
        .iter()
        .map(|t| format!("{} ({})", t.topic, t.count))
        .collect();
    writeln!(out, "  {}", frequent.join(", "))?;

    writeln!(out, "\nUnique Topics by Article")?;
    for unique in analysis.unique_topics_by_article.iter().filter(|u| !u.unique_topics.is_empty()) {
        writeln!(out, "  {}: {}", unique.title, unique.unique_topics.as_slice().join(", "))?;
    }

    writeln!(out, "\nCoverage Differences")?;
    if analysis.coverage_differences.is_empty() {
        writeln!(out, "  No significant coverage differences identified.")?;
    }
    for diff in &analysis.coverage_differences {
        writeln!(out, "  Comparison: {}", diff.comparison)?;
        writeln!(out, "  Impact: {}\n", diff.impact)?;
    }

    writeln!(out, "\n📄 Individual Articles")?;
    for (i, article) in outcome.articles.iter().enumerate() {
        writeln!(out, "{}", RULE)?;
        writeln!(out, "Article {}: {}", i + 1, article.title)?;
        writeln!(
            out,
            "Source: {} | Date: {} | Reading time: {}",
            article.source, article.date, article.reading_time
        )?;
        writeln!(out, "Summary: {}", article.summary)?;
        if let Some(hindi) = outcome.article_translations.get(i) {
            writeln!(out, "Hindi Summary: {}", hindi)?;
        }
        writeln!(
            out,
            "Sentiment: {} ({:.2})",
            article.sentiment.label(),
            article.sentiment.score()
        )?;
        writeln!(out, "Topics: {}", article.topics.as_slice().join(", "))?;
        writeln!(out, "URL: {}", article.url)?;
    }
    writeln!(out, "{}", RULE)?;

    writeln!(out, "\n🎯 Final Sentiment Analysis\n{}", analysis.final_sentiment_analysis)?;
    if outcome.language == Language::Hindi && outcome.audio.is_none() {
        writeln!(out, "\n🔊 Hindi audio could not be generated.")?;
    }
    Ok(())
}

/// Write `<company>_analysis.json` and, when audio exists,
/// `<company>_summary_hindi.<ext>` into `dir`. Returns the written paths.
pub async fn write_exports(outcome: &ReportOutcome, dir: &Path) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir).await?;
    let mut written = Vec::new();

    let report_path = dir.join(report_file_name(&outcome.company));
    tokio::fs::write(&report_path, outcome.report.to_json_pretty()?).await?;
    info!("📥 Wrote {}", report_path.display());
    written.push(report_path);

    if let Some(audio) = &outcome.audio {
        let audio_path = dir.join(audio_file_name(&outcome.company, &outcome.audio_extension));
        tokio::fs::write(&audio_path, audio).await?;
        info!("📥 Wrote {}", audio_path.display());
        written.push(audio_path);
    }
    Ok(written)
}
