use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Anchored page sections, in the order the scroll tracker probes them.
/// The order matters: when bounds overlap, the earlier section wins.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    Features,
    Process,
    Badges,
    Partners,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Features,
        Section::Process,
        Section::Badges,
        Section::Partners,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Sections shown as nav entries (everything but the hero).
    pub const NAV: [Section; 6] = [
        Section::Features,
        Section::Process,
        Section::Badges,
        Section::Partners,
        Section::Testimonials,
        Section::Contact,
    ];

    /// DOM anchor id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Features => "features",
            Section::Process => "process",
            Section::Badges => "badges",
            Section::Partners => "partners",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Features => "Features",
            Section::Process => "Process",
            Section::Badges => "Badges",
            Section::Partners => "Partners",
            Section::Testimonials => "Success Stories",
            Section::Contact => "Contact",
        }
    }
}

/// Vertical extent of one rendered section, as read off its element.
#[derive(Clone, Copy, Debug)]
pub struct SectionBounds {
    pub section: Section,
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.offset_top && y < self.offset_top + self.offset_height
    }
}

/// First section in declared order whose `[top, top + height)` interval
/// contains the probe position. `None` means the caller should keep the
/// previously active section unchanged.
pub fn active_section(probe_y: f64, bounds: &[SectionBounds]) -> Option<Section> {
    bounds
        .iter()
        .find(|b| b.contains(probe_y))
        .map(|b| b.section)
}

/// Reads every section's current bounds out of the document, skipping any
/// that are not in the DOM.
pub fn measure_sections(document: &web_sys::Document) -> Vec<SectionBounds> {
    Section::ALL
        .iter()
        .filter_map(|&section| {
            let element = document.get_element_by_id(section.id())?;
            let html: web_sys::HtmlElement = element.dyn_into().ok()?;
            Some(SectionBounds {
                section,
                offset_top: f64::from(html.offset_top()),
                offset_height: f64::from(html.offset_height()),
            })
        })
        .collect()
}

/// Smooth-scrolls the viewport to a section's anchor element.
pub fn scroll_to(section: Section) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()))
    {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::{active_section, Section, SectionBounds};

    fn bounds(section: Section, top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            section,
            offset_top: top,
            offset_height: height,
        }
    }

    fn page() -> Vec<SectionBounds> {
        // Contiguous sections, the usual rendered layout.
        let heights = [800.0, 600.0, 500.0, 700.0, 400.0, 650.0, 450.0];
        let mut top = 0.0;
        Section::ALL
            .iter()
            .zip(heights)
            .map(|(&section, h)| {
                let b = bounds(section, top, h);
                top += h;
                b
            })
            .collect()
    }

    #[test]
    fn probe_inside_a_section_selects_it() {
        let layout = page();
        assert_eq!(active_section(0.0, &layout), Some(Section::Home));
        assert_eq!(active_section(799.9, &layout), Some(Section::Home));
        assert_eq!(active_section(800.0, &layout), Some(Section::Features));
        // 800 + 600 + 500 + 700 + 400 = 3000 is the testimonials top edge
        assert_eq!(active_section(3100.0, &layout), Some(Section::Testimonials));
    }

    #[test]
    fn interval_is_half_open_at_the_bottom() {
        let layout = vec![bounds(Section::Home, 0.0, 500.0)];
        assert_eq!(active_section(499.9, &layout), Some(Section::Home));
        assert_eq!(active_section(500.0, &layout), None);
    }

    #[test]
    fn no_match_yields_none() {
        let layout = page();
        // Past the end of the last section.
        assert_eq!(active_section(4_200.0, &layout), None);
        assert_eq!(active_section(-1.0, &layout), None);
        assert_eq!(active_section(10.0, &[]), None);
    }

    #[test]
    fn overlapping_bounds_resolve_in_declared_order() {
        let layout = vec![
            bounds(Section::Home, 0.0, 1000.0),
            bounds(Section::Features, 500.0, 1000.0),
        ];
        assert_eq!(active_section(700.0, &layout), Some(Section::Home));
        assert_eq!(active_section(1_200.0, &layout), Some(Section::Features));
    }

    #[test]
    fn ids_match_the_declared_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            [
                "home",
                "features",
                "process",
                "badges",
                "partners",
                "testimonials",
                "contact"
            ]
        );
    }
}
