use heatmapcore::model::{AxisDescriptor, CellDescriptor, Orientation};
use heatmapcore::{format_tooltip, ChartDescriptor};
use iced::{
    mouse, time,
    widget::{
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, mouse_area, scrollable, text, Column, Container,
    },
    Color, Element, Length, Pixels, Point, Rectangle, Renderer, Size, Subscription, Task, Theme,
};
use serde::Deserialize;
use std::time::Duration;

const CHART_URL: &str = "http://127.0.0.1:9000/chart";
/// Tooltip offset from the pointer.
const TOOLTIP_OFFSET: (f32, f32) = (10.0, -28.0);
const TICK_SIZE: f32 = 6.0;
const LABEL_SIZE: f32 = 11.0;

fn main() -> iced::Result {
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Monthly Global Land-Surface Temperature".into()
}

fn application_subscription(_: &Visualizer) -> Subscription<Message> {
    time::every(Duration::from_secs(5)).map(|_| Message::Tick)
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Light
}

#[derive(Debug)]
struct Visualizer {
    chart: Option<ChartDescriptor>,
    hover: Option<Point>,
    status: String,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    Tick,
    ChartFetched(Result<ChartPayload, String>),
    PointerMoved(Point),
    PointerLeft,
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        (
            Visualizer {
                chart: None,
                hover: None,
                status: "Waiting for chart...".into(),
                history: Vec::new(),
            },
            Task::perform(fetch_chart(), Message::ChartFetched),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => Task::perform(fetch_chart(), Message::ChartFetched),
            Message::ChartFetched(Ok(payload)) => {
                match payload.chart {
                    Some(chart) => {
                        let changed = state.chart.as_ref() != Some(&chart);
                        if changed {
                            state.push_history(format!(
                                "Chart: {} cells, {} year ticks",
                                chart.cells.len(),
                                chart.x_axis.ticks.len()
                            ));
                        }
                        state.chart = Some(chart);
                    }
                    None => state.chart = None,
                }
                state.status = payload.status;
                Task::none()
            }
            Message::ChartFetched(Err(err)) => {
                state.status = format!("Chart error: {err}");
                Task::none()
            }
            Message::PointerMoved(point) => {
                state.hover = Some(point);
                Task::none()
            }
            Message::PointerLeft => {
                state.hover = None;
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let heading = column![
            text("Monthly Global Land-Surface Temperature").size(26),
            text("Variance from the long-run baseline, by year and month").size(14),
            text(&state.status).size(12),
        ]
        .spacing(4);

        let body: Element<'_, Message> = match &state.chart {
            Some(chart) => {
                let heatmap = Canvas::new(Heatmap {
                    chart: chart.clone(),
                    hover: state.hover,
                })
                .width(Length::Fixed(chart.width as f32))
                .height(Length::Fixed(chart.height as f32));
                mouse_area(heatmap)
                    .on_move(Message::PointerMoved)
                    .on_exit(Message::PointerLeft)
                    .into()
            }
            None => text("No chart to render").size(14).into(),
        };

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let layout = column![
            heading,
            body,
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(90.0))).padding(6),
        ]
        .spacing(12)
        .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > 20 {
            self.history.remove(0);
        }
    }
}

async fn fetch_chart() -> Result<ChartPayload, String> {
    let response = reqwest::get(CHART_URL).await.map_err(|e| e.to_string())?;
    response
        .json::<ChartPayload>()
        .await
        .map_err(|e| e.to_string())
}

#[derive(Debug, Clone, Deserialize)]
struct ChartPayload {
    #[serde(default)]
    chart: Option<ChartDescriptor>,
    #[serde(default)]
    status: String,
}

#[derive(Clone)]
struct Heatmap {
    chart: ChartDescriptor,
    hover: Option<Point>,
}

fn to_color(color: heatmapcore::color::Color) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

fn label(frame: &mut Frame, content: &str, position: Point, color: Color) {
    frame.fill_text(canvas::Text {
        content: content.to_string(),
        position,
        color,
        size: Pixels(LABEL_SIZE),
        ..canvas::Text::default()
    });
}

/// Rough advance width used to centre or right-align labels.
fn label_width(content: &str) -> f32 {
    content.chars().count() as f32 * LABEL_SIZE * 0.55
}

fn draw_axis(frame: &mut Frame, axis: &AxisDescriptor, origin: Point) {
    let ink = Color::from_rgb(0.15, 0.15, 0.15);
    let tx = origin.x + axis.translate.0 as f32;
    let ty = origin.y + axis.translate.1 as f32;
    let ticks = Path::new(|builder| {
        for tick in &axis.ticks {
            let at = tick.position as f32;
            match axis.orientation {
                Orientation::Bottom => {
                    builder.move_to(Point::new(tx + at, ty));
                    builder.line_to(Point::new(tx + at, ty + TICK_SIZE));
                }
                Orientation::Left => {
                    builder.move_to(Point::new(tx, ty + at));
                    builder.line_to(Point::new(tx - TICK_SIZE, ty + at));
                }
            }
        }
    });
    frame.stroke(&ticks, Stroke::default().with_color(ink).with_width(1.0));

    for tick in &axis.ticks {
        let at = tick.position as f32;
        let position = match axis.orientation {
            Orientation::Bottom => Point::new(
                tx + at - label_width(&tick.label) / 2.0,
                ty + TICK_SIZE + 3.0,
            ),
            Orientation::Left => Point::new(
                tx - TICK_SIZE - 3.0 - label_width(&tick.label),
                ty + at - LABEL_SIZE / 2.0,
            ),
        };
        label(frame, &tick.label, position, ink);
    }
}

fn draw_cell(frame: &mut Frame, cell: &CellDescriptor) {
    frame.fill_rectangle(
        Point::new(cell.x as f32, cell.y as f32),
        Size::new(cell.width as f32, cell.height as f32),
        to_color(cell.fill),
    );
}

impl Heatmap {
    fn draw_legend(&self, frame: &mut Frame) {
        let legend = &self.chart.legend;
        let origin = Point::new(legend.translate.0 as f32, legend.translate.1 as f32);
        for bucket in &legend.buckets {
            frame.fill_rectangle(
                Point::new(origin.x + bucket.x as f32, origin.y),
                Size::new(bucket.width as f32, legend.height as f32),
                to_color(bucket.color),
            );
        }
        draw_axis(frame, &legend.axis, origin);
    }

    fn draw_tooltip(&self, frame: &mut Frame, pointer: Point) {
        let Some(cell) = self.chart.cell_at(f64::from(pointer.x), f64::from(pointer.y)) else {
            return;
        };
        let outline = Path::rectangle(
            Point::new(cell.x as f32, cell.y as f32),
            Size::new(cell.width as f32, cell.height as f32),
        );
        frame.stroke(&outline, Stroke::default().with_color(Color::BLACK).with_width(1.0));

        let tooltip = format_tooltip(&cell.record(), self.chart.base_temperature);
        let line_height = LABEL_SIZE + 4.0;
        let box_width = tooltip
            .lines
            .iter()
            .map(|line| label_width(line))
            .fold(0.0, f32::max)
            + 10.0;
        let box_height = tooltip.lines.len() as f32 * line_height + 10.0;
        let mut corner = Point::new(pointer.x + TOOLTIP_OFFSET.0, pointer.y + TOOLTIP_OFFSET.1);
        corner.x = corner.x.min(self.chart.width as f32 - box_width).max(0.0);
        corner.y = corner.y.max(0.0);

        frame.fill_rectangle(
            corner,
            Size::new(box_width, box_height),
            Color::from_rgba(1.0, 1.0, 1.0, 0.9),
        );
        frame.stroke(
            &Path::rectangle(corner, Size::new(box_width, box_height)),
            Stroke::default().with_color(Color::BLACK).with_width(1.0),
        );
        for (row, line) in tooltip.lines.iter().enumerate() {
            label(
                frame,
                line,
                Point::new(corner.x + 5.0, corner.y + 5.0 + row as f32 * line_height),
                Color::BLACK,
            );
        }
    }
}

impl canvas::Program<Message> for Heatmap {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::WHITE);

        for cell in &self.chart.cells {
            draw_cell(&mut frame, cell);
        }
        draw_axis(&mut frame, &self.chart.x_axis, Point::ORIGIN);
        draw_axis(&mut frame, &self.chart.y_axis, Point::ORIGIN);
        self.draw_legend(&mut frame);

        if let Some(pointer) = self.hover {
            self.draw_tooltip(&mut frame, pointer);
        }

        vec![frame.into_geometry()]
    }
}
