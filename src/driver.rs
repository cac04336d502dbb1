//! Positions every section of the placemat and draws it onto a canvas.

use crate::config::PlacematConfig;
use crate::content::{self, GroupContent};
use crate::error::PipelineError;
use crate::geometry::{LayoutConstants, Span};
use crate::plan::{PlacematPlan, PlannedBox, PlannedGrid, PlannedSection, PlannedText};
use placemat_layout::{draw_box, draw_grid, GridConfig};
use placemat_render_core::{Canvas, RenderError, StandardFont};
use placemat_style::{BoxStyle, Palette};
use placemat_types::{Color, Point};

const TITLE_FONT_SIZE: f64 = 24.0;
const LEGEND_FONT_SIZE: f64 = 9.0;
const SECURITY_FONT_SIZE: f64 = 10.0;
const PILLAR_HEADER_FONT_SIZE: f64 = 6.0;
const BANNER_FONT_SIZE: f64 = 12.0;
const FOOTER_FONT_SIZE: f64 = 10.0;
const STRIP_BORDER_WIDTH: f64 = 1.0;

#[derive(Debug)]
pub struct LayoutDriver {
    constants: LayoutConstants,
    palette: Palette,
    grid: GridConfig,
    title: String,
}

impl LayoutDriver {
    pub fn new(config: &PlacematConfig) -> Result<Self, PipelineError> {
        let constants = LayoutConstants::new(config.page.dimensions_pt(), &config.geometry)?;
        Ok(Self {
            constants,
            palette: config.palette.clone(),
            grid: config.grid,
            title: config.title.clone(),
        })
    }

    pub fn constants(&self) -> &LayoutConstants {
        &self.constants
    }

    /// Computes the absolute position of every section.
    pub fn plan(&self) -> PlacematPlan {
        let mut sections = vec![
            self.header(),
            self.client_engineering(),
            self.security(),
        ];
        sections.extend(self.security_groups());
        sections.push(self.client_applications());
        sections.extend(self.pillars());
        sections.extend(self.app_row());
        sections.extend(self.right_column());
        sections.push(self.red_hat());
        sections.push(self.enterprise_storage());
        sections.extend(self.infrastructure());
        sections.push(self.footer());

        PlacematPlan {
            page: self.constants.page,
            sections,
        }
    }

    /// Draws a plan section by section.
    pub fn render<C: Canvas + ?Sized>(
        &self,
        plan: &PlacematPlan,
        canvas: &mut C,
    ) -> Result<(), RenderError> {
        for section in &plan.sections {
            log::debug!("Drawing section '{}'", section.id);
            for text in &section.texts {
                canvas.set_fill_color(text.color);
                canvas.set_font(text.font, text.size)?;
                canvas.draw_text(text.origin.x, text.origin.y, &text.text)?;
            }
            if let Some(header) = &section.header {
                draw_box(canvas, header.rect, &header.label, &header.style)?;
            }
            for planned in &section.boxes {
                draw_box(canvas, planned.rect, &planned.label, &planned.style)?;
            }
            if let Some(grid) = &section.grid {
                draw_grid(
                    canvas,
                    grid.region,
                    grid.items,
                    grid.columns,
                    grid.border_color,
                    &self.grid,
                )?;
            }
        }
        Ok(())
    }

    fn header_box(&self, span: Span, y: f64, label: &str, style: BoxStyle) -> PlannedBox {
        PlannedBox {
            rect: span.rect(y, self.constants.section_header_height),
            label: label.to_string(),
            style,
        }
    }

    /// A group whose header sits at `header_y` with the grid region below it.
    fn group(
        &self,
        group: &GroupContent,
        span: Span,
        header_y: f64,
        grid_y: f64,
        grid_height: f64,
        header_style: BoxStyle,
    ) -> PlannedSection {
        let color = self.palette.tone(group.tone);
        PlannedSection::new(group.id)
            .with_header(self.header_box(span, header_y, group.title, header_style))
            .with_grid(PlannedGrid {
                region: span.rect(grid_y, grid_height),
                items: group.items,
                columns: group.columns,
                border_color: color,
            })
    }

    fn tone_header(&self, group: &GroupContent) -> BoxStyle {
        BoxStyle::header(self.palette.tone(group.tone))
    }

    fn header(&self) -> PlannedSection {
        let c = &self.constants;
        let mut section = PlannedSection::new("header").with_text(PlannedText {
            origin: Point::new(c.margin, c.title_baseline()),
            text: self.title.clone(),
            font: StandardFont::HelveticaBold,
            size: TITLE_FONT_SIZE,
            color: Color::BLACK,
        });
        for (rect, kind) in c.legend_rects(content::LEGEND.len()).into_iter().zip(content::LEGEND) {
            section = section.with_box(PlannedBox {
                rect,
                label: kind.label().to_string(),
                style: BoxStyle::default()
                    .with_fill(kind.color(&self.palette))
                    .borderless()
                    .with_font_size(LEGEND_FONT_SIZE),
            });
        }
        section.with_box(PlannedBox {
            rect: c.badge_rect(),
            label: content::ELA_BADGE.to_string(),
            style: BoxStyle::default()
                .with_fill(self.palette.badge_fill)
                .borderless(),
        })
    }

    fn client_engineering(&self) -> PlannedSection {
        PlannedSection::new("client-engineering").with_box(PlannedBox {
            rect: self.constants.client_engineering_rect(),
            label: content::CLIENT_ENGINEERING.to_string(),
            style: BoxStyle::default()
                .with_border_color(Color::BLACK)
                .with_border_width(STRIP_BORDER_WIDTH)
                .bold()
                .vertical(),
        })
    }

    fn security(&self) -> PlannedSection {
        let c = &self.constants;
        let style = BoxStyle::default()
            .borderless()
            .bold()
            .with_font_size(SECURITY_FONT_SIZE);
        PlannedSection::new("security").with_header(self.header_box(
            c.security,
            c.body_top - c.section_header_height,
            content::SECURITY,
            style,
        ))
    }

    fn security_groups(&self) -> Vec<PlannedSection> {
        let c = &self.constants;
        let data_header_y = c.first_grid_top() - c.section_header_height;
        let data_y = data_header_y - c.data_security_height;
        let identity_header_y = data_y - c.header_advance - c.gap;
        let identity_y = identity_header_y - c.identity_height;

        let data = &content::DATA_SECURITY;
        let identity = &content::IDENTITY_ACCESS;
        vec![
            self.group(
                data,
                c.security,
                data_header_y,
                data_y,
                c.data_security_height,
                self.tone_header(data),
            ),
            self.group(
                identity,
                c.security,
                identity_header_y,
                identity_y,
                c.identity_height,
                self.tone_header(identity),
            ),
        ]
    }

    fn client_applications(&self) -> PlannedSection {
        let c = &self.constants;
        let group = &content::CLIENT_APPLICATIONS;
        self.group(
            group,
            c.center,
            c.body_top - c.section_header_height,
            c.client_applications_y(),
            c.client_applications_height,
            self.tone_header(group),
        )
    }

    fn pillars(&self) -> Vec<PlannedSection> {
        let c = &self.constants;
        let header_y = c.pillars_top() - c.section_header_height;
        let grid_height = c.pillars_height - c.section_header_height - c.gap;
        c.pillar_spans()
            .into_iter()
            .zip(content::PILLARS.iter())
            .map(|(span, group)| {
                let style = self.tone_header(group).with_font_size(PILLAR_HEADER_FONT_SIZE);
                self.group(group, span, header_y, c.pillars_y(), grid_height, style)
            })
            .collect()
    }

    fn app_row(&self) -> Vec<PlannedSection> {
        let c = &self.constants;
        let header_y = c.app_row_top() - c.section_header_height;
        let grid_height = c.app_row_height - c.section_header_height - c.gap;
        c.app_row_spans()
            .into_iter()
            .zip(content::APP_ROW.iter())
            .map(|(span, group)| {
                self.group(
                    group,
                    span,
                    header_y,
                    c.app_row_bottom(),
                    grid_height,
                    self.tone_header(group),
                )
            })
            .collect()
    }

    fn right_column(&self) -> Vec<PlannedSection> {
        let c = &self.constants;
        let it = &content::IT_AUTOMATION;
        let network = &content::NETWORK_MANAGEMENT;
        vec![
            self.group(
                it,
                c.right,
                c.body_top - c.section_header_height,
                c.it_automation_y(),
                c.it_automation_height,
                self.tone_header(it),
            ),
            self.group(
                network,
                c.right,
                c.network_top() - c.section_header_height,
                c.network_y(),
                c.network_height() - c.section_header_height,
                self.tone_header(network),
            ),
        ]
    }

    fn red_hat(&self) -> PlannedSection {
        let c = &self.constants;
        let red = self.palette.red_text;
        PlannedSection::new("red-hat").with_box(PlannedBox {
            rect: c.wide_span().rect(c.banner_y(), c.banner_height),
            label: content::RED_HAT.to_string(),
            style: BoxStyle::default()
                .with_text_color(red)
                .with_border_color(red)
                .bold()
                .with_font_size(BANNER_FONT_SIZE),
        })
    }

    fn infrastructure_header_y(&self) -> f64 {
        let c = &self.constants;
        c.infrastructure_y() + c.infrastructure_height - c.section_header_height
    }

    fn enterprise_storage(&self) -> PlannedSection {
        let c = &self.constants;
        let group = &content::ENTERPRISE_STORAGE;
        self.group(
            group,
            c.security,
            self.infrastructure_header_y(),
            c.infrastructure_y(),
            c.infrastructure_height - c.section_header_height,
            self.tone_header(group),
        )
    }

    fn infrastructure(&self) -> Vec<PlannedSection> {
        let c = &self.constants;
        let units: Vec<usize> = content::INFRASTRUCTURE.iter().map(|g| g.columns).collect();
        c.infrastructure_spans(&units)
            .into_iter()
            .zip(content::INFRASTRUCTURE.iter())
            .map(|(span, group)| {
                self.group(
                    group,
                    span,
                    self.infrastructure_header_y(),
                    c.infrastructure_y(),
                    c.infrastructure_height - c.section_header_height,
                    self.tone_header(group),
                )
            })
            .collect()
    }

    fn footer(&self) -> PlannedSection {
        let c = &self.constants;
        let style = BoxStyle::default()
            .with_fill(self.palette.footer_fill)
            .with_border_color(self.palette.grey_header)
            .bold()
            .with_font_size(FOOTER_FONT_SIZE);
        c.footer_spans()
            .into_iter()
            .zip(content::FOOTER)
            .fold(PlannedSection::new("footer"), |section, (span, label)| {
                section.with_box(PlannedBox {
                    rect: span.rect(c.margin, c.footer_height),
                    label: label.to_string(),
                    style,
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placemat_render_core::RecordingCanvas;
    use std::collections::HashSet;

    fn driver() -> LayoutDriver {
        LayoutDriver::new(&PlacematConfig::default()).unwrap()
    }

    #[test]
    fn test_sections_in_drawing_order() {
        let plan = driver().plan();
        let ids: Vec<&str> = plan.section_ids().collect();
        assert_eq!(
            ids,
            vec![
                "header",
                "client-engineering",
                "security",
                "data-security",
                "identity-access",
                "client-applications",
                "pillar-1",
                "pillar-2",
                "pillar-3",
                "pillar-4",
                "pillar-5",
                "pillar-6",
                "application-development",
                "application-integration",
                "it-automation",
                "network-management",
                "red-hat",
                "enterprise-storage",
                "infrastructure-1",
                "infrastructure-2",
                "infrastructure-3",
                "infrastructure-4",
                "footer",
            ]
        );
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn test_headers_match_content() {
        let plan = driver().plan();
        for group in content::all_groups() {
            let section = plan.section(group.id).unwrap();
            assert_eq!(section.title(), Some(group.title));
            let grid = section.grid.as_ref().unwrap();
            assert_eq!(grid.items, group.items);
            assert_eq!(grid.columns, group.columns);
        }
        assert_eq!(plan.item_count(), 167);
    }

    #[test]
    fn test_sections_stay_on_page() {
        let plan = driver().plan();
        let page = placemat_types::Rect::new(0.0, 0.0, plan.page.width, plan.page.height);
        for section in &plan.sections {
            for rect in section.rects() {
                assert!(page.contains(&rect), "{} leaves the page: {:?}", section.id, rect);
            }
        }
    }

    #[test]
    fn test_pillar_headers_use_small_font() {
        let plan = driver().plan();
        let pillar = plan.section("pillar-3").unwrap();
        let header = pillar.header.as_ref().unwrap();
        assert_eq!(header.style.font_size, 6.0);
        assert_eq!(header.style.fill, Palette::DEEP_BLUE);
        assert_eq!(
            plan.section("pillar-6").unwrap().grid.as_ref().unwrap().border_color,
            Palette::PURPLE
        );
    }

    #[test]
    fn test_network_grid_fills_down_to_app_row() {
        let d = driver();
        let plan = d.plan();
        let network = plan.section("network-management").unwrap();
        let grid = network.grid.as_ref().unwrap();
        assert!((grid.region.y - d.constants().app_row_bottom()).abs() < 1e-6);
        let header = network.header.as_ref().unwrap();
        assert!((grid.region.top() - header.rect.y).abs() < 1e-6);
    }

    #[test]
    fn test_render_draws_every_label_once_per_occurrence() {
        let d = driver();
        let plan = d.plan();
        let mut canvas = RecordingCanvas::new(plan.page);
        d.render(&plan, &mut canvas).unwrap();

        assert!(canvas.is_balanced());
        let texts: Vec<String> = canvas.texts().map(|t| t.text.to_string()).collect();
        assert_eq!(texts.iter().filter(|t| *t == "IBM Technology").count(), 1);
        assert_eq!(texts.iter().filter(|t| *t == "Red Hat OpenShift").count(), 3);
        assert_eq!(texts.iter().filter(|t| *t == "CP4D").count(), 4);
        for group in content::all_groups() {
            assert!(texts.iter().any(|t| t == group.title), "missing {}", group.title);
        }
    }

    #[test]
    fn test_title_comes_from_config() {
        let config = PlacematConfig {
            title: "Portfolio".to_string(),
            ..PlacematConfig::default()
        };
        let plan = LayoutDriver::new(&config).unwrap().plan();
        let header = plan.section("header").unwrap();
        assert_eq!(header.texts[0].text, "Portfolio");
        assert_eq!(header.boxes.len(), 5);
    }
}
