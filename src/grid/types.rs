/// The four custom-artwork slots Steam reads from config/grid.
///
/// Filenames are `<app_id>` plus a per-slot suffix; the extension is fixed
/// by what the apply step writes (jpg, png for the logo), never inferred
/// from the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtKind {
    /// Horizontal header/capsule: `<id>.jpg`
    Header,
    /// Vertical 600x900 capsule: `<id>p.jpg`
    Portrait,
    /// Wide library banner: `<id>_hero.jpg`
    Hero,
    /// Transparent logo overlay: `<id>_logo.png`
    Logo,
}

pub const ALL_ART_KINDS: [ArtKind; 4] = [
    ArtKind::Header,
    ArtKind::Portrait,
    ArtKind::Hero,
    ArtKind::Logo,
];

impl ArtKind {
    /// On-disk filename for this slot under a grid directory.
    pub fn filename(&self, app_id: &str) -> String {
        match self {
            ArtKind::Header => format!("{app_id}.jpg"),
            ArtKind::Portrait => format!("{app_id}p.jpg"),
            ArtKind::Hero => format!("{app_id}_hero.jpg"),
            ArtKind::Logo => format!("{app_id}_logo.png"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ArtKind::Header => "header",
            ArtKind::Portrait => "portrait",
            ArtKind::Hero => "hero",
            ArtKind::Logo => "logo",
        }
    }
}
