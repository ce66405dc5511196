/// Format seconds as `MM:SS`. Minutes are not wrapped, so 3600 reads `60:00`.
#[inline]
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
