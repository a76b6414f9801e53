use crate::model::{Depth, Rating, ScoredResult, Verdict};
use crate::report::summary::RunSummary;
use crate::runner::CaseSink;
use std::sync::Arc;

const BANNER_WIDTH: usize = 65;
const RULE_WIDTH: usize = 50;

pub fn print_header(suite: &str, total: usize) {
    eprintln!("🚀 {}", suite);
    eprintln!("{}", "=".repeat(BANNER_WIDTH));
    eprintln!("🧪 Running {} tests...", total);
}

/// Per-case block, printed live as each case completes.
pub fn print_case(index: usize, total: usize, row: &ScoredResult) {
    eprintln!();
    eprintln!("📋 Test {}/{}: {}", index, total, row.category);
    eprintln!("❓ Question: {}", row.question);
    eprintln!("{}", "-".repeat(RULE_WIDTH));

    if !row.success {
        eprintln!("❌ Error: {}", row.error.as_deref().unwrap_or("unknown"));
        return;
    }

    if let Some(secs) = row.elapsed_secs {
        eprintln!("✅ Response received in {:.2}s", secs);
    }
    if let Some(preview) = &row.preview {
        eprintln!("📝 Response: {}{}", preview, ellipsis(row));
    }
    if let Some(cov) = row.coverage {
        eprintln!("🎯 Keyword coverage: {:.1}%", cov);
    }
    if let Some(matched) = row.matched.as_ref().filter(|m| !m.is_empty()) {
        eprintln!("🔑 Found: {}", matched.join(", "));
    }
}

/// A sink that renders each case as soon as it is scored.
pub fn live_sink() -> CaseSink {
    Arc::new(|index, total, row| print_case(index, total, row))
}

pub fn print_summary(s: &RunSummary) {
    eprintln!();
    eprintln!("{}", "=".repeat(BANNER_WIDTH));
    eprintln!("📊 TEST SUMMARY & PERFORMANCE ANALYSIS");
    eprintln!("{}", "=".repeat(BANNER_WIDTH));
    eprintln!("✅ Successful tests: {}/{}", s.passed, s.total);
    eprintln!("❌ Failed tests: {}", s.failed);

    if let Some(secs) = s.mean_elapsed_secs {
        eprintln!("⏱️  Average response time: {:.2}s", secs);
    }
    if let Some(cov) = s.mean_coverage {
        eprintln!("🎯 Average keyword coverage: {:.1}%", cov);
    }
    if let Some(len) = s.mean_response_len {
        eprintln!("📝 Average response length: {:.0} characters", len);
    }

    if s.speed.is_some() || s.accuracy.is_some() || s.depth.is_some() {
        eprintln!();
        eprintln!("📈 Performance metrics:");
        if let Some(r) = s.speed {
            eprintln!("   • API response speed: {}", rating_label(r));
        }
        if let Some(r) = s.accuracy {
            eprintln!("   • Content accuracy: {}", rating_label(r));
        }
        if let Some(d) = s.depth {
            eprintln!("   • Response completeness: {}", depth_label(d));
        }
    }

    if !s.failures.is_empty() {
        eprintln!();
        eprintln!("❌ Failed tests:");
        for f in &s.failures {
            eprintln!("   • {}: {}", f.category, f.error);
        }
    }

    eprintln!();
    eprintln!("✨ Conclusion: {}", conclusion_line(s.verdict));
}

/// "..." when the preview cut the response short.
fn ellipsis(row: &ScoredResult) -> &'static str {
    let preview_chars = row.preview.as_ref().map_or(0, |p| p.chars().count());
    if row.response_len.unwrap_or(0) > preview_chars {
        "..."
    } else {
        ""
    }
}

pub fn rating_label(r: Rating) -> &'static str {
    match r {
        Rating::Excellent => "🟢 Excellent",
        Rating::Good => "🟡 Good",
        Rating::NeedsImprovement => "🔴 Needs improvement",
    }
}

pub fn depth_label(d: Depth) -> &'static str {
    match d {
        Depth::Detailed => "🟢 Detailed",
        Depth::Moderate => "🟡 Moderate",
        Depth::Brief => "🔴 Brief",
    }
}

pub fn conclusion_line(v: Verdict) -> &'static str {
    match v {
        Verdict::Excellent => "System is performing excellently!",
        Verdict::NeedsAdjustments => "System needs some adjustments.",
    }
}
