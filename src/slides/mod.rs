//! Per-category rendering routines
//!
//! Every category has its own routine that composes a handful of primitives
//! and returns a complete SVG document. Routines share nothing but the
//! canvas constants, the palette, and [`SvgBuilder`](crate::renderer::SvgBuilder).

mod fallback;
mod keynote;
mod layouts;
mod media;
mod showcase;

use crate::catalog::{SlideCategory, SlideKind};
use crate::palette::Palette;

pub use fallback::generic;

/// Signature shared by every category routine
pub type Routine = fn(&Palette) -> String;

/// The routine registered for a category
pub fn routine(category: SlideCategory) -> Routine {
    use SlideCategory::*;
    match category {
        HeroTitle => keynote::hero_title,
        CpuSpec => keynote::cpu_spec,
        GpuSpec => keynote::gpu_spec,
        BenchmarkBars => keynote::benchmark_bars,
        BenchmarkCards => keynote::benchmark_cards,
        ProductHighlights => keynote::product_highlights,
        Battery => keynote::battery,
        Pricing => keynote::pricing,
        Timeline => showcase::timeline,
        SplitTable => showcase::split_table,
        PieChart => showcase::pie_chart,
        BarChart => showcase::bar_chart,
        IconTrio => showcase::icon_trio,
        ImageCollage => media::image_collage,
        HeroPhoto => media::hero_photo,
        Testimonial => media::testimonial,
        BeforeAfter => media::before_after,
        KpiContrast => media::kpi_contrast,
        FeatureSlots => media::feature_slots,
        Closing => media::closing,
        ContentFocus => layouts::content_focus,
        FeatureComparison => layouts::feature_comparison,
        StatHighlight => layouts::stat_highlight,
        ProcessFlow => layouts::process_flow,
        SplitContent => layouts::split_content,
        CardLayout => layouts::card_layout,
        Diagram => layouts::diagram,
        Quote => layouts::quote,
        ImageText => layouts::image_text,
        MetricDashboard => layouts::metric_dashboard,
        SectionDivider => layouts::section_divider,
        EndSlide => layouts::end_slide,
    }
}

/// Render a resolved slide
pub fn render_kind(kind: SlideKind, palette: &Palette) -> String {
    match kind {
        SlideKind::Known(category) => routine(category)(palette),
        SlideKind::Unmapped(index) => generic(index, &kind.label(), palette),
    }
}

/// Render any slide index; unmapped indices use the generic routine
pub fn render_slide(index: u32, palette: &Palette) -> String {
    render_kind(SlideKind::resolve(index), palette)
}
