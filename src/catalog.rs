//! Slide catalog: the fixed table from slide index to category
//!
//! Indices 1 through 32 each name exactly one category. Any other index is
//! still accepted and resolves to [`SlideKind::Unmapped`], which renders a
//! generic placeholder under the label `slide_<n>`.

use std::fmt;

/// Number of mapped slides
pub const SLIDE_COUNT: u32 = 32;

macro_rules! slide_categories {
    ($($index:literal => $variant:ident, $label:literal, $title:literal;)*) => {
        /// One slide layout template
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum SlideCategory {
            $($variant,)*
        }

        impl SlideCategory {
            /// All categories in index order
            pub const ALL: [SlideCategory; SLIDE_COUNT as usize] = [
                $(SlideCategory::$variant,)*
            ];

            /// Look up the category registered for an index
            pub fn from_index(index: u32) -> Option<Self> {
                match index {
                    $($index => Some(SlideCategory::$variant),)*
                    _ => None,
                }
            }

            /// The slide index this category occupies
            pub fn index(self) -> u32 {
                match self {
                    $(SlideCategory::$variant => $index,)*
                }
            }

            /// snake_case label used in file names
            pub fn label(self) -> &'static str {
                match self {
                    $(SlideCategory::$variant => $label,)*
                }
            }

            /// Human-readable title
            pub fn title(self) -> &'static str {
                match self {
                    $(SlideCategory::$variant => $title,)*
                }
            }
        }
    };
}

slide_categories! {
    1 => HeroTitle, "hero_title", "Hero Title";
    2 => CpuSpec, "cpu_spec", "CPU Spec";
    3 => GpuSpec, "gpu_spec", "GPU Spec";
    4 => BenchmarkBars, "benchmark_bars", "Benchmark Bars";
    5 => BenchmarkCards, "benchmark_cards", "Benchmark Cards";
    6 => ProductHighlights, "product_highlights", "Product Highlights";
    7 => Battery, "battery", "Battery";
    8 => Pricing, "pricing", "Pricing";
    9 => Timeline, "timeline", "Timeline";
    10 => SplitTable, "split_table", "Split Table";
    11 => PieChart, "pie_chart", "Pie Chart";
    12 => BarChart, "bar_chart", "Bar Chart";
    13 => IconTrio, "icon_trio", "Icon Trio";
    14 => ImageCollage, "image_collage", "Image Collage";
    15 => HeroPhoto, "hero_photo", "Hero Photo";
    16 => Testimonial, "testimonial", "Testimonial";
    17 => BeforeAfter, "before_after", "Before After";
    18 => KpiContrast, "kpi_contrast", "KPI Contrast";
    19 => FeatureSlots, "feature_slots", "Feature Slots";
    20 => Closing, "closing", "Closing";
    21 => ContentFocus, "content_focus", "Content Focus";
    22 => FeatureComparison, "feature_comparison", "Feature Comparison";
    23 => StatHighlight, "stat_highlight", "Stat Highlight";
    24 => ProcessFlow, "process_flow", "Process Flow";
    25 => SplitContent, "split_content", "Split Content";
    26 => CardLayout, "card_layout", "Card Layout";
    27 => Diagram, "diagram", "Diagram";
    28 => Quote, "quote", "Quote";
    29 => ImageText, "image_text", "Image Text";
    30 => MetricDashboard, "metric_dashboard", "Metric Dashboard";
    31 => SectionDivider, "section_divider", "Section Divider";
    32 => EndSlide, "end_slide", "End Slide";
}

impl SlideCategory {
    /// Reverse lookup by label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for SlideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a slide index resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Known(SlideCategory),
    /// Index outside the table; rendered by the generic routine
    Unmapped(u32),
}

impl SlideKind {
    /// Resolve any index; never fails
    pub fn resolve(index: u32) -> Self {
        match SlideCategory::from_index(index) {
            Some(category) => SlideKind::Known(category),
            None => SlideKind::Unmapped(index),
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            SlideKind::Known(category) => category.index(),
            SlideKind::Unmapped(index) => *index,
        }
    }

    /// Category label, or `slide_<n>` for an unmapped index
    pub fn label(&self) -> String {
        match self {
            SlideKind::Known(category) => category.label().to_string(),
            SlideKind::Unmapped(index) => format!("slide_{}", index),
        }
    }

    /// Output file name for this slide
    pub fn filename(&self) -> String {
        output_filename(self.index(), &self.label())
    }
}

/// `apple_template_<NNN>_<label>.svg`
pub fn output_filename(index: u32, label: &str) -> String {
    format!("apple_template_{:03}_{}.svg", index, label)
}

/// Title-case a snake_case label: `split_table` becomes `Split Table`
pub fn title_case(label: &str) -> String {
    label
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_total_over_range() {
        for index in 1..=SLIDE_COUNT {
            let category = SlideCategory::from_index(index).expect("mapped index");
            assert_eq!(category.index(), index);
        }
    }

    #[test]
    fn test_all_is_in_index_order() {
        assert_eq!(SlideCategory::ALL.len(), 32);
        for (i, category) in SlideCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i as u32 + 1);
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let labels: HashSet<_> = SlideCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), 32);
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(SlideCategory::from_index(1), Some(SlideCategory::HeroTitle));
        assert_eq!(SlideCategory::from_index(9), Some(SlideCategory::Timeline));
        assert_eq!(SlideCategory::from_index(11), Some(SlideCategory::PieChart));
        assert_eq!(SlideCategory::from_index(32), Some(SlideCategory::EndSlide));
    }

    #[test]
    fn test_unmapped_fallback_label() {
        assert_eq!(SlideKind::resolve(0), SlideKind::Unmapped(0));
        assert_eq!(SlideKind::resolve(0).label(), "slide_0");
        assert_eq!(SlideKind::resolve(33).label(), "slide_33");
    }

    #[test]
    fn test_from_label_round_trips() {
        for category in SlideCategory::ALL {
            assert_eq!(SlideCategory::from_label(category.label()), Some(category));
        }
        assert_eq!(SlideCategory::from_label("nope"), None);
    }

    #[test]
    fn test_output_filename() {
        assert_eq!(
            SlideKind::resolve(1).filename(),
            "apple_template_001_hero_title.svg"
        );
        assert_eq!(
            SlideKind::resolve(33).filename(),
            "apple_template_033_slide_33.svg"
        );
        assert_eq!(output_filename(1000, "x"), "apple_template_1000_x.svg");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("split_table"), "Split Table");
        assert_eq!(title_case("slide_33"), "Slide 33");
        assert_eq!(title_case("kpi"), "Kpi");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(SlideCategory::BeforeAfter.to_string(), "before_after");
    }
}
