// src/gui/components/chart.rs
//
// "Team Tempo vs Offensive Efficiency" scatter, painted by hand.
// x = tempo, y = adjusted offense. Hovering a dot names the team.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::specs::EfficiencyRecord;

const HEIGHT: f32 = 260.0;
const MARGIN_L: f32 = 52.0;
const MARGIN_B: f32 = 36.0;
const MARGIN_T: f32 = 24.0;
const MARGIN_R: f32 = 12.0;
const TICKS: usize = 5;
const HOVER_RADIUS: f32 = 6.0;

/// Axis range padded by 5% (or ±1 when all values are equal).
pub fn padded_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let (lo, hi) = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })?;
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    Some((lo - pad, hi + pad))
}

fn lerp(v: f64, (lo, hi): (f64, f64), a: f32, b: f32) -> f32 {
    let t = ((v - lo) / (hi - lo)) as f32;
    a + (b - a) * t
}

pub fn draw(ui: &mut egui::Ui, records: &[EfficiencyRecord]) {
    let (Some(xr), Some(yr)) = (
        padded_range(records.iter().map(|r| r.tempo)),
        padded_range(records.iter().map(|r| r.adjusted_offense)),
    ) else {
        return;
    };

    let width = ui.available_width();
    let (response, painter) = ui.allocate_painter(Vec2::new(width, HEIGHT), Sense::hover());
    let outer = response.rect;
    let plot = Rect::from_min_max(
        Pos2::new(outer.left() + MARGIN_L, outer.top() + MARGIN_T),
        Pos2::new(outer.right() - MARGIN_R, outer.bottom() - MARGIN_B),
    );

    let visuals = ui.visuals();
    let text = visuals.text_color();
    let weak = visuals.weak_text_color();
    let dot = visuals.selection.bg_fill;
    let small = FontId::proportional(11.0);

    painter.text(
        Pos2::new(outer.center().x, outer.top() + 2.0),
        Align2::CENTER_TOP,
        "Team Tempo vs Offensive Efficiency",
        FontId::proportional(14.0),
        text,
    );
    painter.rect_stroke(plot, 0.0, Stroke::new(1.0, weak), StrokeKind::Inside);

    let to_screen = |x: f64, y: f64| {
        Pos2::new(
            lerp(x, xr, plot.left(), plot.right()),
            lerp(y, yr, plot.bottom(), plot.top()),
        )
    };

    // ticks
    for i in 0..=TICKS {
        let f = i as f64 / TICKS as f64;
        let xv = xr.0 + (xr.1 - xr.0) * f;
        let yv = yr.0 + (yr.1 - yr.0) * f;
        let px = lerp(xv, xr, plot.left(), plot.right());
        let py = lerp(yv, yr, plot.bottom(), plot.top());
        painter.line_segment([Pos2::new(px, plot.bottom()), Pos2::new(px, plot.bottom() + 4.0)], Stroke::new(1.0, weak));
        painter.text(Pos2::new(px, plot.bottom() + 5.0), Align2::CENTER_TOP, format!("{xv:.1}"), small.clone(), weak);
        painter.line_segment([Pos2::new(plot.left() - 4.0, py), Pos2::new(plot.left(), py)], Stroke::new(1.0, weak));
        painter.text(Pos2::new(plot.left() - 6.0, py), Align2::RIGHT_CENTER, format!("{yv:.1}"), small.clone(), weak);
    }

    painter.text(
        Pos2::new(plot.center().x, outer.bottom() - 2.0),
        Align2::CENTER_BOTTOM,
        "Possessions per Game",
        small.clone(),
        text,
    );
    painter.text(
        Pos2::new(outer.left() + 2.0, outer.top() + 2.0),
        Align2::LEFT_TOP,
        "Adjusted Offensive Efficiency",
        small.clone(),
        text,
    );

    let hover = response.hover_pos();
    let mut hovered: Option<(Pos2, &EfficiencyRecord)> = None;

    for r in records {
        let p = to_screen(r.tempo, r.adjusted_offense);
        painter.circle_filled(p, 3.5, dot);
        if let Some(h) = hover {
            if h.distance(p) <= HOVER_RADIUS {
                hovered = Some((p, r));
            }
        }
    }

    if let Some((p, r)) = hovered {
        painter.circle_stroke(p, HOVER_RADIUS, Stroke::new(1.5, Color32::WHITE));
        painter.text(
            p + Vec2::new(8.0, -8.0),
            Align2::LEFT_BOTTOM,
            format!("{} ({:.1}, {:.1})", r.team, r.tempo, r.adjusted_offense),
            small,
            text,
        );
    }
}
