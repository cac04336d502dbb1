//! Absolute page coordinates derived from the configured geometry.
//!
//! Every position the layout driver uses is computed here once, so the closure
//! properties (columns fill the content width, strips fill their height) can be
//! checked in one place.

use crate::config::GeometryConfig;
use crate::error::PipelineError;
use placemat_types::geometry::EPSILON;
use placemat_types::{Rect, Size, POINTS_PER_INCH};

/// Drop from the top content edge to the title baseline and the legend row.
pub const TITLE_DROP: f64 = 0.6 * POINTS_PER_INCH;
/// Drop from the legend row to the ELA badge.
pub const BADGE_DROP: f64 = 0.4 * POINTS_PER_INCH;
/// Width units shared by the infrastructure groups.
pub const INFRASTRUCTURE_UNITS: usize = 9;

/// A horizontal band: left edge and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub x: f64,
    pub width: f64,
}

impl Span {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// The rectangle covering this span between `y` and `y + height`.
    pub fn rect(&self, y: f64, height: f64) -> Rect {
        Rect::new(self.x, y, self.width, height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConstants {
    pub page: Size,
    pub margin: f64,
    pub gap: f64,
    /// Top edge of the printable area.
    pub top: f64,
    pub content_width: f64,

    pub client_engineering: Span,
    pub security: Span,
    pub center: Span,
    pub right: Span,

    pub section_header_height: f64,
    pub header_advance: f64,
    pub footer_height: f64,
    pub banner_height: f64,
    pub infrastructure_height: f64,

    /// Top of the body area below the page header.
    pub body_top: f64,
    pub body_height: f64,

    pub data_security_height: f64,
    pub identity_height: f64,
    pub client_applications_height: f64,
    pub pillars_height: f64,
    pub app_row_height: f64,
    pub it_automation_height: f64,

    pub legend: Size,
    pub badge: Size,
}

impl LayoutConstants {
    /// Derives every constant, rejecting geometry that leaves no room for the
    /// center column or the body.
    pub fn new(page: Size, geometry: &GeometryConfig) -> Result<Self, PipelineError> {
        let margin = geometry.margin.points();
        let gap = geometry.gap.points();
        let content_width = page.width - 2.0 * margin;

        let ce_width = geometry.client_engineering_width.points();
        let sec_width = geometry.security_width.points();
        let right_width = geometry.right_width.points();
        let center_width = content_width - ce_width - sec_width - right_width - 3.0 * gap;

        let client_engineering = Span {
            x: margin,
            width: ce_width,
        };
        let security = Span {
            x: client_engineering.right() + gap,
            width: sec_width,
        };
        let center = Span {
            x: security.right() + gap,
            width: center_width,
        };
        let right = Span {
            x: center.right() + gap,
            width: right_width,
        };

        let footer_height = geometry.footer_height.points();
        let banner_height = geometry.banner_height.points();
        let infrastructure_height = geometry.infrastructure_height.points();
        let body_top = page.height - margin - geometry.header_height.points();
        let body_height =
            body_top - margin - footer_height - infrastructure_height - banner_height - 2.0 * gap;

        let constants = Self {
            page,
            margin,
            gap,
            top: page.height - margin,
            content_width,
            client_engineering,
            security,
            center,
            right,
            section_header_height: geometry.section_header_height.points(),
            header_advance: geometry.header_advance.points(),
            footer_height,
            banner_height,
            infrastructure_height,
            body_top,
            body_height,
            data_security_height: geometry.data_security_height.points(),
            identity_height: geometry.identity_height.points(),
            client_applications_height: geometry.client_applications_height.points(),
            pillars_height: geometry.pillars_height.points(),
            app_row_height: geometry.app_row_height.points(),
            it_automation_height: geometry.it_automation_height.points(),
            legend: Size::new(geometry.legend_width.points(), geometry.legend_height.points()),
            badge: Size::new(geometry.badge_width.points(), geometry.badge_height.points()),
        };
        constants.validate()?;
        log::debug!(
            "Page {:.2}x{:.2}pt, center column {:.2}pt, body height {:.2}pt",
            page.width,
            page.height,
            center_width,
            body_height
        );
        Ok(constants)
    }

    fn validate(&self) -> Result<(), PipelineError> {
        if self.center.width <= 0.0 {
            return Err(PipelineError::Config(format!(
                "fixed columns leave no room for the center column ({:.2}pt on a {:.2}pt wide page)",
                self.center.width, self.page.width
            )));
        }
        if self.body_height <= 0.0 {
            return Err(PipelineError::Config(format!(
                "header, footer and infrastructure rows leave no body height ({:.2}pt)",
                self.body_height
            )));
        }
        let footer_top = self.margin + self.footer_height;
        if self.infrastructure_y() < footer_top - EPSILON {
            return Err(PipelineError::Config(format!(
                "stacked sections run {:.2}pt into the footer",
                footer_top - self.infrastructure_y()
            )));
        }
        let network = self.network_height();
        if network <= self.section_header_height {
            log::warn!(
                "Network section is only {:.2}pt tall; its grid will be empty space",
                network
            );
        }
        Ok(())
    }

    // Client engineering strip.

    pub fn client_engineering_rect(&self) -> Rect {
        let y = self.margin + self.footer_height + self.gap;
        let height = self.body_height + self.banner_height + self.infrastructure_height + 2.0 * self.gap;
        self.client_engineering.rect(y, height)
    }

    // Center column, top to bottom.

    /// Top edge of the first grid under a body-top header.
    pub fn first_grid_top(&self) -> f64 {
        self.body_top - self.header_advance
    }

    pub fn client_applications_y(&self) -> f64 {
        self.first_grid_top() - self.client_applications_height
    }

    pub fn pillars_top(&self) -> f64 {
        self.client_applications_y() - self.gap
    }

    pub fn pillars_y(&self) -> f64 {
        self.pillars_top() - self.pillars_height
    }

    pub fn app_row_top(&self) -> f64 {
        self.pillars_y() - self.gap
    }

    pub fn app_row_bottom(&self) -> f64 {
        self.app_row_top() - self.app_row_height
    }

    /// Six equal pillar columns across the center column.
    pub fn pillar_spans(&self) -> Vec<Span> {
        self.split_equal(self.center, 6)
    }

    /// Two equal halves of the center column.
    pub fn app_row_spans(&self) -> Vec<Span> {
        self.split_equal(self.center, 2)
    }

    // Right column.

    pub fn it_automation_y(&self) -> f64 {
        self.first_grid_top() - self.it_automation_height
    }

    pub fn network_top(&self) -> f64 {
        self.it_automation_y() - self.gap
    }

    /// Whatever is left of the right column down to the app row's bottom edge.
    pub fn network_height(&self) -> f64 {
        (self.first_grid_top() - self.app_row_bottom()) - self.it_automation_height - self.gap
    }

    pub fn network_y(&self) -> f64 {
        self.network_top() - self.network_height()
    }

    // Rows under the body.

    /// The span shared by the banner and the infrastructure groups.
    pub fn wide_span(&self) -> Span {
        Span {
            x: self.center.x,
            width: self.right.right() - self.center.x,
        }
    }

    pub fn banner_y(&self) -> f64 {
        self.app_row_bottom() - self.gap - self.banner_height
    }

    pub fn infrastructure_y(&self) -> f64 {
        self.banner_y() - self.gap - self.infrastructure_height
    }

    /// Splits the wide span into groups of `units` width units, one gap between
    /// neighbouring units, so the groups and their gaps close exactly.
    pub fn infrastructure_spans(&self, units: &[usize]) -> Vec<Span> {
        let total_units: usize = units.iter().sum();
        if total_units == 0 {
            return Vec::new();
        }
        let wide = self.wide_span();
        let unit = (wide.width - (total_units - 1) as f64 * self.gap) / total_units as f64;
        let mut x = wide.x;
        units
            .iter()
            .map(|&n| {
                let width = unit * n as f64 + self.gap * n.saturating_sub(1) as f64;
                let span = Span { x, width };
                x += width + self.gap;
                span
            })
            .collect()
    }

    /// Two equal footer cells across the content width.
    pub fn footer_spans(&self) -> Vec<Span> {
        self.split_equal(
            Span {
                x: self.margin,
                width: self.content_width,
            },
            2,
        )
    }

    // Page header.

    pub fn title_baseline(&self) -> f64 {
        self.top - TITLE_DROP
    }

    /// The legend swatches, right-aligned to the margin with a trailing gap.
    pub fn legend_rects(&self, count: usize) -> Vec<Rect> {
        let step = self.legend.width + self.gap;
        let x0 = self.page.width - self.margin - count as f64 * step;
        let y = self.title_baseline();
        (0..count)
            .map(|i| Rect::new(x0 + i as f64 * step, y, self.legend.width, self.legend.height))
            .collect()
    }

    pub fn badge_rect(&self) -> Rect {
        Rect::new(
            self.page.width - self.margin - self.badge.width,
            self.title_baseline() - BADGE_DROP,
            self.badge.width,
            self.badge.height,
        )
    }

    fn split_equal(&self, span: Span, count: usize) -> Vec<Span> {
        let width = (span.width - (count - 1) as f64 * self.gap) / count as f64;
        (0..count)
            .map(|i| Span {
                x: span.x + i as f64 * (width + self.gap),
                width,
            })
            .collect()
    }
}
