/// Which accent a tip is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TipAccent {
    Verified,
    Warning,
    Trust,
}

#[derive(Clone, Copy, Debug)]
pub struct QuickTip {
    pub title: &'static str,
    pub body: &'static str,
    pub accent: TipAccent,
}

/// Heading of the guidance panel shown before the first analysis.
pub const QUICK_TIPS_HEADING: &str = "Quick Digital Immunity Tips";

/// Footer printed under every immunity tip card.
pub const IMMUNITY_FOOTER: &str =
    "The more you practice spotting these patterns, the stronger your digital immunity becomes!";

const QUICK_TIPS: &[QuickTip] = &[
    QuickTip {
        title: "Check Sources",
        body: "Look for credible, named sources and official documentation",
        accent: TipAccent::Verified,
    },
    QuickTip {
        title: "Emotional Language",
        body: "Be wary of content designed to make you angry or scared",
        accent: TipAccent::Warning,
    },
    QuickTip {
        title: "Cross-Reference",
        body: "Verify claims through multiple independent sources",
        accent: TipAccent::Trust,
    },
];

/// Fixed guidance shown while no analysis result exists.
pub fn quick_tips() -> &'static [QuickTip] {
    QUICK_TIPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_fixed_tips_in_display_order() {
        let titles: Vec<_> = quick_tips().iter().map(|tip| tip.title).collect();
        assert_eq!(
            titles,
            ["Check Sources", "Emotional Language", "Cross-Reference"]
        );
        assert!(quick_tips().iter().all(|tip| !tip.body.is_empty()));
    }
}
