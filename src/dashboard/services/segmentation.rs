use crate::dashboard::domain::PackageRecord;

/// Minimum display fraction per segment (12% of the strip width).
///
/// Raw proportional widths make rare statuses illegible; every segment is
/// floored at this fraction and the remainder is redistributed among the
/// larger segments. Counts stay exact, only the rendered width is adjusted.
pub const MIN_FRACTION: f64 = 0.12;

/// Bucket label for records that carry no status.
pub const UNKNOWN_STATUS: &str = "Unknown";

/// Fallback color for statuses without an entry in the color table.
pub const FALLBACK_COLOR: &str = "#CBD5E1";

const STATUS_COLORS: &[(&str, &str)] = &[
    ("Enabled", "#D4F5DF"),
    ("In Progress", "#D6E4FF"),
    ("TBD", "#E5F3FF"),
    ("Optimized", "#EBDDFF"),
];

/// Looks up the display color for a status label.
pub fn status_color(status: &str) -> &'static str {
    STATUS_COLORS
        .iter()
        .find(|(name, _)| *name == status)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// One renderable slice of the status summary strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSegment {
    pub status: String,
    /// Exact record count for this status.
    pub count: usize,
    /// Display fraction of the strip, full precision. Does not necessarily
    /// equal `count / total` because of the minimum-width floor.
    pub fraction: f64,
    pub color: &'static str,
}

impl StatusSegment {
    /// Display percentage; round only at render time.
    pub fn percentage(&self) -> f64 {
        self.fraction * 100.0
    }
}

/// The status breakdown of the full dataset.
#[derive(Debug, Clone, Default)]
pub struct StatusSummary {
    pub segments: Vec<StatusSegment>,
    pub total: usize,
}

/// Computes the status summary over the full raw dataset.
///
/// This deliberately ignores the current filter/search state: the strip is
/// a stable global indicator, not a view of the filtered table.
///
/// Small buckets (raw fraction below [`MIN_FRACTION`]) are pinned to the
/// minimum; the remaining width is split among the large buckets in
/// proportion to their raw fractions. When the floor alone would exceed
/// 100% (at nine or more distinct statuses), proportionality is abandoned
/// and every bucket gets an equal share.
pub fn summarize(records: &[PackageRecord]) -> StatusSummary {
    let total = records.len();
    if total == 0 {
        return StatusSummary::default();
    }

    // Buckets keep first-seen order so the strip layout is stable
    let mut buckets: Vec<(String, usize)> = Vec::new();
    for record in records {
        let status = record
            .status
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_STATUS);
        match buckets.iter().position(|(name, _)| name == status) {
            Some(i) => buckets[i].1 += 1,
            None => buckets.push((status.to_string(), 1)),
        }
    }

    let bucket_count = buckets.len();
    let raw: Vec<f64> = buckets
        .iter()
        .map(|(_, count)| *count as f64 / total as f64)
        .collect();

    let fractions: Vec<f64> = if MIN_FRACTION * bucket_count as f64 >= 1.0 {
        // Degenerate case: the floor cannot be honored proportionally
        vec![1.0 / bucket_count as f64; bucket_count]
    } else {
        let small_count = raw.iter().filter(|f| **f < MIN_FRACTION).count();
        let remaining = 1.0 - MIN_FRACTION * small_count as f64;
        // An all-small partition would have tripped the degenerate case,
        // so at least one large bucket exists and this sum is positive
        let large_sum: f64 = raw.iter().filter(|f| **f >= MIN_FRACTION).sum();
        raw.iter()
            .map(|fraction| {
                if *fraction < MIN_FRACTION {
                    MIN_FRACTION
                } else {
                    fraction / large_sum * remaining
                }
            })
            .collect()
    };

    let segments = buckets
        .into_iter()
        .zip(fractions)
        .map(|((status, count), fraction)| {
            let color = status_color(&status);
            StatusSegment {
                status,
                count,
                fraction,
                color,
            }
        })
        .collect();

    StatusSummary { segments, total }
}
