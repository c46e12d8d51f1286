/// Start of the partition bucket containing `timestamp`, for a fixed bucket
/// width `interval`. Floor division, so negative timestamps land in the
/// bucket below zero instead of straddling it.
pub fn bucket_start(timestamp: i64, interval: i64) -> i64 {
    timestamp.div_euclid(interval) * interval
}
