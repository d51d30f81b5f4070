//! Verdict Rendering — text and JSON reports
//!
//! Analysis itself returns a structured [`PairVerdict`]; this module turns
//! that record into output. The text form mirrors the layout used when
//! checking pairs by hand: header, the two sequences, the combined
//! correlation vectors, a per-shift table, and the final verdict line.
//! The JSON form is a direct serialization of the verdict for downstream
//! tooling.
//!
//! ## Example
//!
//! ```rust
//! use pqcp_core::pair_analyzer::{analyze_pair, AnalyzerConfig};
//! use pqcp_core::report::render_text;
//! use pqcp_core::sequence::BinarySequence;
//!
//! let a = BinarySequence::parse("++-+").unwrap();
//! let b = BinarySequence::parse("+++-").unwrap();
//! let verdict = analyze_pair(&a, &b, &AnalyzerConfig::default()).unwrap();
//!
//! let mut out = Vec::new();
//! render_text(&verdict, &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("Max PSL: "));
//! ```

use std::io::{self, Write};

use crate::pair_analyzer::PairVerdict;

const RULE: &str = "-------------------------------------------";

/// Writes the human-readable verification report.
pub fn render_text(verdict: &PairVerdict, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Verification for L={} ===", verdict.length)?;
    writeln!(out, "Sequence A: {}", verdict.sequence_a)?;
    writeln!(out, "Sequence B: {}", verdict.sequence_b)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "PACF sum (full): {:?}", verdict.combined)?;
    writeln!(out, "PACF sum (sidelobes): {:?}", verdict.sidelobes)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "   u |  rho_A |  rho_B |    sum | status")?;
    for row in &verdict.rows {
        let magnitude = row.combined.abs();
        let status = if magnitude > verdict.threshold {
            "FAIL"
        } else if magnitude == verdict.threshold {
            "peak"
        } else {
            "ok"
        };
        writeln!(
            out,
            "{:>4} | {:>6} | {:>6} | {:>6} | {}",
            row.shift, row.rho_a, row.rho_b, row.combined, status
        )?;
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Max PSL: {}", verdict.max_psl)?;
    if verdict.passed {
        writeln!(
            out,
            "SUCCESS: valid (L, {})-quasi-complementary pair.",
            verdict.threshold
        )?;
        writeln!(
            out,
            "Peaks at magnitude {}: {}",
            verdict.threshold, verdict.peaks_at_bound
        )?;
    } else {
        writeln!(
            out,
            "FAIL: bound {} exceeded at shifts {:?}",
            verdict.threshold, verdict.violations
        )?;
    }
    Ok(())
}

/// Serializes the verdict as pretty-printed JSON.
pub fn render_json(verdict: &PairVerdict) -> serde_json::Result<String> {
    serde_json::to_string_pretty(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair_analyzer::{analyze_pair, AnalyzerConfig};
    use crate::sequence::BinarySequence;

    fn verdict_for(a: &str, b: &str) -> PairVerdict {
        let a = BinarySequence::parse(a).unwrap();
        let b = BinarySequence::parse(b).unwrap();
        analyze_pair(&a, &b, &AnalyzerConfig::default()).unwrap()
    }

    fn rendered(a: &str, b: &str) -> String {
        let verdict = verdict_for(a, b);
        let mut out = Vec::new();
        render_text(&verdict, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_success_report_sections_in_order() {
        let text = rendered("++-+", "+++-");
        let header = text.find("=== Verification for L=4 ===").unwrap();
        let echo_a = text.find("Sequence A: ++-+").unwrap();
        let echo_b = text.find("Sequence B: +++-").unwrap();
        let full = text.find("PACF sum (full): [8,").unwrap();
        let side = text.find("PACF sum (sidelobes): ").unwrap();
        let psl = text.find("Max PSL: ").unwrap();
        let verdict_line = text.find("SUCCESS: valid (L, 4)-quasi-complementary pair.").unwrap();
        let peaks = text.find("Peaks at magnitude 4: ").unwrap();
        let found_order = vec![header, echo_a, echo_b, full, side, psl, verdict_line, peaks];
        let mut expected_order = found_order.clone();
        expected_order.sort_unstable();
        assert_eq!(found_order, expected_order, "report sections out of order");
    }

    #[test]
    fn test_failure_report_lists_violations() {
        let text = rendered("+++++", "+++++");
        assert!(text.contains("Max PSL: 10"));
        assert!(text.contains("FAIL: bound 4 exceeded at shifts [1, 2, 3, 4]"));
        assert!(!text.contains("SUCCESS"));
    }

    #[test]
    fn test_table_has_one_row_per_sidelobe() {
        let text = rendered("++-+-", "+--++");
        let rows = text.lines().filter(|l| l.contains(" | ")).count();
        // header row plus L-1 data rows
        assert_eq!(rows, 1 + 4);
    }

    #[test]
    fn test_json_carries_verdict_fields() {
        let verdict = verdict_for("++-+", "+++-");
        let json = render_json(&verdict).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["length"], 4);
        assert_eq!(value["passed"], true);
        assert_eq!(value["sequence_a"], "++-+");
        assert_eq!(value["max_psl"], verdict.max_psl);
    }
}
