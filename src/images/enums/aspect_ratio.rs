#[non_exhaustive]
pub struct AspectRatio;

impl AspectRatio {
    pub const ALL: [&str; 11] = [
        "1:1", "16:9", "9:16", "21:9", "9:21", "4:5", "5:4", "4:3", "3:4", "2:3", "3:2",
    ];

    pub fn is_supported(aspect_ratio: &str) -> bool {
        Self::ALL.contains(&aspect_ratio)
    }
}
