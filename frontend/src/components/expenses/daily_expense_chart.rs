use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use shared::{format_date_short, format_yen, DailyPoint};

#[derive(Properties, PartialEq)]
pub struct DailyExpenseChartProps {
    /// Trailing seven-day series, oldest first.
    pub series: Vec<DailyPoint>,
    pub loading: bool,
}

/// Line chart of the trailing seven days, drawn with plotters onto a
/// canvas. Redraws whenever the series changes.
pub struct DailyExpenseChart {
    canvas_ref: NodeRef,
}

impl Component for DailyExpenseChart {
    type Message = ();
    type Properties = DailyExpenseChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().series != old_props.series {
            self.draw_chart(&ctx.props().series);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().series.is_empty() {
            self.draw_chart(&ctx.props().series);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-container card">
                {if ctx.props().loading && ctx.props().series.is_empty() {
                    html! { <div class="placeholder">{"読み込み中..."}</div> }
                } else {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            class="daily-chart-canvas"
                            width="700"
                            height="300"
                        ></canvas>
                    }
                }}
            </div>
        }
    }
}

impl DailyExpenseChart {
    fn draw_chart(&self, series: &[DailyPoint]) {
        if series.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(700);
        canvas.set_height(300);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let max_amount = series.iter().map(|point| point.amount).max().unwrap_or(0) as f64;
        // Keep a readable axis even when the whole week is zero
        let y_max = (max_amount * 1.1).max(1000.0);
        let labels: Vec<String> = series
            .iter()
            .map(|point| format_date_short(point.date))
            .collect();

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(30)
            .y_label_area_size(70)
            .build_cartesian_2d(0f64..6f64, 0f64..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .x_labels(7)
            .y_labels(6)
            .x_label_formatter(&|x| {
                let index = x.round() as usize;
                labels.get(index).cloned().unwrap_or_default()
            })
            .y_label_formatter(&|y| format_yen(*y as i64))
            .label_style(("sans-serif", 12))
            .axis_style(&RGBColor(230, 230, 230))
            .draw()
            .is_err()
        {
            return;
        }

        let line_color = RGBColor(37, 99, 235);
        if chart
            .draw_series(LineSeries::new(
                series
                    .iter()
                    .enumerate()
                    .map(|(index, point)| (index as f64, point.amount as f64)),
                line_color.stroke_width(2),
            ))
            .is_err()
        {
            return;
        }

        for (index, point) in series.iter().enumerate() {
            if chart
                .draw_series(std::iter::once(Circle::new(
                    (index as f64, point.amount as f64),
                    4,
                    line_color.filled(),
                )))
                .is_err()
            {
                return;
            }
        }

        let _ = root.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_draw_chart_with_empty_series_is_a_no_op() {
        let chart = DailyExpenseChart {
            canvas_ref: NodeRef::default(),
        };
        // Must not panic without a mounted canvas
        chart.draw_chart(&[]);
    }

    #[test]
    fn test_draw_chart_without_canvas_is_a_no_op() {
        let chart = DailyExpenseChart {
            canvas_ref: NodeRef::default(),
        };
        let series = vec![DailyPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            amount: 1000,
        }];
        // NodeRef is not attached to a canvas; drawing must bail out
        chart.draw_chart(&series);
    }
}
