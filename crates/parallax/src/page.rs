//! Page structure: which elements exist and how each section animates.
//!
//! ```text
//! header            (anchor = target, plays on mount)
//! about             (anchor = target)
//! skills   ─┬─ skill-0 .. skill-N      (targets, stagger)
//! projects ─┬─ project-0 .. project-N  (targets, stagger)
//! contact  ─┬─ contact-0 .. contact-N  (targets, stagger, overshoot)
//! ```
//!
//! Element ids are allocated in document order, so the same content
//! always yields the same ids. Hosts build their layout probe from
//! [`PageElements`] before mounting.

use std::fmt;

use parallax_motion::{ElementId, RegionDescriptor, StaticLayout};

use crate::config::MotionConfig;
use crate::content::ProfileContent;

/// The animated sections of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRegion {
    /// Name and headline banner.
    Header,
    /// "About Me" card.
    About,
    /// Skill chip grid.
    Skills,
    /// Project card grid.
    Projects,
    /// Contact buttons.
    Contact,
}

impl PageRegion {
    /// All sections, top to bottom.
    pub const ALL: [Self; 5] = [
        Self::Header,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Contact,
    ];

    /// DOM id and log name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for PageRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element ids for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElements {
    /// Header banner.
    pub header: ElementId,
    /// About card.
    pub about: ElementId,
    /// Skills grid container.
    pub skills: ElementId,
    /// One per skill chip.
    pub skill_items: Vec<ElementId>,
    /// Projects section.
    pub projects: ElementId,
    /// One per project card.
    pub project_cards: Vec<ElementId>,
    /// Contact button row.
    pub contact: ElementId,
    /// One per contact button.
    pub contact_links: Vec<ElementId>,
}

impl PageElements {
    /// Header height used by [`PageElements::stack_layout`].
    pub const HEADER_HEIGHT: f32 = 120.0;
    /// Single-row section height used by [`PageElements::stack_layout`].
    pub const SECTION_HEIGHT: f32 = 300.0;
    /// Grid row height used by [`PageElements::stack_layout`].
    pub const ROW_HEIGHT: f32 = 60.0;

    /// Allocates ids for `content` in document order.
    #[must_use]
    pub fn for_content(content: &ProfileContent) -> Self {
        let mut next = 0;
        let mut alloc = || {
            next += 1;
            ElementId(next)
        };

        let header = alloc();
        let about = alloc();
        let skills = alloc();
        let skill_items = content.skills.iter().map(|_| alloc()).collect();
        let projects = alloc();
        let project_cards = content.projects.iter().map(|_| alloc()).collect();
        let contact = alloc();
        let contact_links = content.contacts.iter().map(|_| alloc()).collect();

        Self {
            header,
            about,
            skills,
            skill_items,
            projects,
            project_cards,
            contact,
            contact_links,
        }
    }

    /// Anchor element of a section.
    #[must_use]
    pub fn anchor(&self, region: PageRegion) -> ElementId {
        match region {
            PageRegion::Header => self.header,
            PageRegion::About => self.about,
            PageRegion::Skills => self.skills,
            PageRegion::Projects => self.projects,
            PageRegion::Contact => self.contact,
        }
    }

    /// Animated children of a section. Empty means the anchor itself.
    #[must_use]
    pub fn targets(&self, region: PageRegion) -> &[ElementId] {
        match region {
            PageRegion::Header | PageRegion::About => &[],
            PageRegion::Skills => &self.skill_items,
            PageRegion::Projects => &self.project_cards,
            PageRegion::Contact => &self.contact_links,
        }
    }

    /// Every element with its DOM id, in document order.
    #[must_use]
    pub fn dom_ids(&self) -> Vec<(ElementId, String)> {
        let mut ids = Vec::with_capacity(
            5 + self.skill_items.len() + self.project_cards.len() + self.contact_links.len(),
        );
        for region in PageRegion::ALL {
            ids.push((self.anchor(region), region.name().to_string()));
            let prefix = match region {
                PageRegion::Skills => "skill",
                PageRegion::Projects => "project",
                PageRegion::Contact => "contact",
                PageRegion::Header | PageRegion::About => continue,
            };
            for (i, element) in self.targets(region).iter().enumerate() {
                ids.push((*element, format!("{prefix}-{i}")));
            }
        }
        ids
    }

    /// A headless layout with sections stacked top to bottom.
    ///
    /// Grid children get one row each inside their section.
    #[must_use]
    pub fn stack_layout(&self, viewport_height: f32) -> StaticLayout {
        let mut layout = StaticLayout::new(viewport_height);
        let mut top = 0.0;
        for region in PageRegion::ALL {
            let children = self.targets(region);
            let height = match region {
                PageRegion::Header => Self::HEADER_HEIGHT,
                _ => Self::SECTION_HEIGHT.max(Self::ROW_HEIGHT * children.len() as f32),
            };
            layout.insert(self.anchor(region), top, height);
            for (i, child) in children.iter().enumerate() {
                layout.insert(*child, top + Self::ROW_HEIGHT * i as f32, Self::ROW_HEIGHT);
            }
            top += height;
        }
        layout
    }
}

/// Builds the descriptor for one section.
///
/// The header is never scroll-gated; every other section uses the
/// configured trigger.
#[must_use]
pub fn region_descriptor(
    region: PageRegion,
    elements: &PageElements,
    motion: &MotionConfig,
) -> RegionDescriptor {
    let preset = match region {
        PageRegion::Header => motion.header,
        PageRegion::About => motion.about,
        PageRegion::Skills => motion.skills,
        PageRegion::Projects => motion.projects,
        PageRegion::Contact => motion.contact,
    };

    let descriptor = RegionDescriptor::new(region.name(), elements.anchor(region), preset.tween())
        .with_targets(elements.targets(region).iter().copied())
        .with_stagger(preset.stagger);

    match region {
        PageRegion::Header => descriptor,
        _ => descriptor.with_trigger(motion.trigger()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parallax_motion::{ElementStyle, ViewportProbe};

    #[test]
    fn test_ids_follow_document_order() {
        let elements = PageElements::for_content(&ProfileContent::default());
        assert_eq!(elements.header, ElementId(1));
        assert_eq!(elements.skills, ElementId(3));
        assert_eq!(elements.skill_items.len(), 14);
        assert_eq!(elements.skill_items[0], ElementId(4));
        assert_eq!(elements.projects, ElementId(18));
        assert_eq!(elements.project_cards.len(), 3);
        assert_eq!(elements.contact_links.len(), 3);
    }

    #[test]
    fn test_dom_ids() {
        let elements = PageElements::for_content(&ProfileContent::default());
        let ids = elements.dom_ids();
        assert_eq!(ids.len(), 5 + 14 + 3 + 3);
        assert_eq!(ids[0], (elements.header, "header".to_string()));
        assert!(ids.contains(&(elements.project_cards[2], "project-2".to_string())));
    }

    #[test]
    fn test_header_is_not_gated() {
        let elements = PageElements::for_content(&ProfileContent::default());
        let motion = MotionConfig::default();

        let header = region_descriptor(PageRegion::Header, &elements, &motion);
        assert!(header.trigger.is_none());
        assert!(header.targets.is_empty());
        assert_eq!(header.tween.from, ElementStyle::offset_y(-100.0));

        let contact = region_descriptor(PageRegion::Contact, &elements, &motion);
        assert_eq!(contact.trigger, Some(motion.trigger()));
        assert_eq!(contact.targets, elements.contact_links);
        assert_eq!(contact.tween.from, ElementStyle::collapsed());
    }

    #[test]
    fn test_stack_layout_places_sections_in_order() {
        let elements = PageElements::for_content(&ProfileContent::default());
        let layout = elements.stack_layout(800.0);

        let header = layout.bounds(elements.header).unwrap();
        let about = layout.bounds(elements.about).unwrap();
        let contact = layout.bounds(elements.contact).unwrap();
        assert_eq!(header.top, 0.0);
        assert_eq!(about.top, header.bottom);
        assert!(contact.top > about.bottom);

        let first_skill = layout.bounds(elements.skill_items[0]).unwrap();
        assert_eq!(first_skill.top, layout.bounds(elements.skills).unwrap().top);
    }
}
