use super::config::FadeConfig;
use super::content::ContentModel;

/// The paint decision: which edges get a gradient this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeVisibility {
    pub top: bool,
    pub bottom: bool,
}

impl EdgeVisibility {
    pub const HIDDEN: EdgeVisibility = EdgeVisibility { top: false, bottom: false };

    #[inline]
    pub fn any(self) -> bool {
        self.top || self.bottom
    }
}

/// Decides which fades are visible right now.
///
/// Disabled config hides both edges unconditionally. Otherwise each edge
/// follows its content predicate directly. Scroll activity plays no part
/// here: it only makes the owner repaint more eagerly while a gesture is
/// in flight, it never gates whether an edge fades.
pub fn evaluate(config: &FadeConfig, content: &impl ContentModel) -> EdgeVisibility {
    if !config.is_fade_enabled() {
        return EdgeVisibility::HIDDEN;
    }
    EdgeVisibility {
        top: content.should_show_top_fade(),
        bottom: content.should_show_bottom_fade(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fade::content::BoundedScrollModel;

    #[test]
    fn follows_content_predicates() {
        let config = FadeConfig::new();

        let vis = evaluate(&config, &BoundedScrollModel::new(0.0, 100.0));
        assert_eq!(vis, EdgeVisibility { top: false, bottom: true });

        let vis = evaluate(&config, &BoundedScrollModel::new(50.0, 100.0));
        assert_eq!(vis, EdgeVisibility { top: true, bottom: true });

        let vis = evaluate(&config, &BoundedScrollModel::new(100.0, 100.0));
        assert_eq!(vis, EdgeVisibility { top: true, bottom: false });
    }

    #[test]
    fn disabled_hides_both_regardless_of_content() {
        let mut config = FadeConfig::new();
        config.set_fade_enabled(false);

        let vis = evaluate(&config, &BoundedScrollModel::new(50.0, 100.0));
        assert_eq!(vis, EdgeVisibility::HIDDEN);
        assert!(!vis.any());
    }
}
