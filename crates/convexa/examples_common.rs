use convexa::math::point::Point;
use convexa::math::vector::Vector;
use convexa::math::FloatNum;
use convexa::shape::ConvexPolygon;
use convexa_macro_tools::{Builder, Deref};
use speedy2d::color::Color;
use speedy2d::dimen::Vector2;
use speedy2d::window::{MouseScrollDistance, VirtualKeyCode, WindowHandler, WindowHelper};
use speedy2d::Graphics2D;

#[derive(Builder)]
pub struct Config {
    #[default = 10.0]
    scale: FloatNum,
    is_default_paused: bool,
    #[default = true]
    draw_grid: bool,
    draw_center_point: bool,
}

pub enum Mark {
    Point(Point, Color),
    Segment(Point, Point, Color),
    Outline(Vec<Point>, Color),
}

/// marks live for a single frame
#[derive(Default, Deref)]
pub struct Marks(Vec<Mark>);

#[derive(Default)]
pub struct Stage {
    pub polygons: Vec<ConvexPolygon>,
    marks: Marks,
}

impl Stage {
    pub fn push(&mut self, polygon: ConvexPolygon) -> usize {
        self.polygons.push(polygon);
        self.polygons.len() - 1
    }

    pub fn mark_point(&mut self, point: Point, color: Color) {
        self.marks.push(Mark::Point(point, color));
    }

    pub fn mark_segment(&mut self, start: Point, end: Point, color: Color) {
        self.marks.push(Mark::Segment(start, end, color));
    }

    pub fn mark_outline(&mut self, outline: Vec<Point>, color: Color) {
        self.marks.push(Mark::Outline(outline, color));
    }

    fn clear(&mut self) {
        self.polygons.clear();
        self.marks.clear();
    }
}

type InitFn = dyn FnMut(&mut Stage);

// second argument is the cursor in world space
type UpdateFn = dyn FnMut(&mut Stage, Option<Point>);

pub struct Handler {
    stage: Stage,
    init: Box<InitFn>,
    update: Box<UpdateFn>,
    is_paused: bool,
    is_mouse_down: bool,
    cursor: Option<Point>,
    selected_polygon: Option<usize>,
    config: Config,
    render_offset: Vector,
}

fn into_vector2(p: Point) -> Vector2<f32> {
    Vector2::new(p.x() as f32, p.y() as f32)
}

struct DrawHelper<'a> {
    graphics: &'a mut Graphics2D,
    scale: FloatNum,
    render_offset: Vector,
}

impl DrawHelper<'_> {
    fn to_screen(&self, point: &Point) -> Vector2<f32> {
        into_vector2(((point.to_vector() + self.render_offset) * self.scale).to_point())
    }

    fn draw_line(&mut self, start_point: &Point, end_point: &Point, color: Color) {
        let (start, end) = (self.to_screen(start_point), self.to_screen(end_point));
        self.graphics.draw_line(start, end, 2.0, color)
    }

    fn draw_circle(&mut self, center_point: &Point, radius: FloatNum, color: Color) {
        let center = self.to_screen(center_point);
        self.graphics
            .draw_circle(center, (radius * self.scale) as f32, color);
    }

    fn draw_outline(&mut self, outline: &[Point], color: Color) {
        for (i, start) in outline.iter().enumerate() {
            let end = &outline[(i + 1) % outline.len()];
            self.draw_line(start, end, color);
        }
    }
}

impl Handler {
    fn to_world(&self, position: speedy2d::dimen::Vec2) -> Point {
        Point::new(
            position.x as FloatNum / self.config.scale,
            position.y as FloatNum / self.config.scale,
        ) - self.render_offset
    }
}

impl WindowHandler for Handler {
    fn on_start(
        &mut self,
        _helper: &mut WindowHelper<()>,
        _info: speedy2d::window::WindowStartupInfo,
    ) {
        (self.init)(&mut self.stage);
    }

    fn on_key_down(
        &mut self,
        _helper: &mut WindowHelper<()>,
        virtual_key_code: Option<VirtualKeyCode>,
        _scancode: speedy2d::window::KeyScancode,
    ) {
        match virtual_key_code {
            Some(VirtualKeyCode::R) => {
                self.stage.clear();
                (self.init)(&mut self.stage);
            }
            Some(VirtualKeyCode::Space) => {
                self.is_paused = !self.is_paused;
            }
            Some(VirtualKeyCode::G) => {
                self.config.draw_grid = !self.config.draw_grid;
            }
            _ => {}
        }
    }

    fn on_mouse_button_down(
        &mut self,
        _helper: &mut WindowHelper<()>,
        _button: speedy2d::window::MouseButton,
    ) {
        self.is_mouse_down = true;
        self.selected_polygon = self.cursor.and_then(|cursor| {
            self.stage
                .polygons
                .iter()
                .position(|polygon| polygon.contains_point(&cursor).unwrap_or(false))
        });
    }

    fn on_mouse_button_up(
        &mut self,
        _helper: &mut WindowHelper<()>,
        _button: speedy2d::window::MouseButton,
    ) {
        self.is_mouse_down = false;
        self.selected_polygon = None;
    }

    fn on_mouse_wheel_scroll(
        &mut self,
        _helper: &mut WindowHelper<()>,
        distance: MouseScrollDistance,
    ) {
        if let MouseScrollDistance::Pixels { y, .. } = distance {
            self.config.scale = (self.config.scale + y * 0.1).max(1.);
        }
    }

    fn on_mouse_move(&mut self, _helper: &mut WindowHelper<()>, position: speedy2d::dimen::Vec2) {
        let new_cursor = self.to_world(position);

        if let Some(cursor) = self.cursor.filter(|_| self.is_mouse_down) {
            let delta: Vector = (cursor, new_cursor).into();
            match self.selected_polygon {
                Some(index) => {
                    let polygon = &mut self.stage.polygons[index];
                    let mut transform = polygon.transform();
                    transform += &delta.into();
                    polygon.set_transform(transform);
                }
                // the grabbed world point stays under the cursor
                None => {
                    self.render_offset += delta;
                    return;
                }
            }
        }

        self.cursor = Some(new_cursor);
    }

    fn on_draw(&mut self, helper: &mut WindowHelper, graphics: &mut Graphics2D) {
        if !self.is_paused {
            self.stage.marks.clear();
            (self.update)(&mut self.stage, self.cursor);
        }

        graphics.clear_screen(Color::from_gray(0.8));

        let mut draw_helper = DrawHelper {
            graphics,
            scale: self.config.scale,
            render_offset: self.render_offset,
        };

        if self.config.draw_grid {
            for i in -50..50 {
                let offset = i as FloatNum * 10.;
                draw_helper.draw_line(
                    &(offset, -500.).into(),
                    &(offset, 500.).into(),
                    Color::from_gray(0.7),
                );
                draw_helper.draw_line(
                    &(-500., offset).into(),
                    &(500., offset).into(),
                    Color::from_gray(0.7),
                );
            }
        }

        for polygon in self.stage.polygons.iter() {
            for edge in polygon.edges() {
                draw_helper.draw_line(edge.start_point(), edge.end_point(), Color::WHITE);
            }
            if self.config.draw_center_point {
                if let Some(center_point) = polygon.center_point() {
                    draw_helper.draw_circle(&center_point, 0.3, Color::BLUE);
                }
            }
        }

        for mark in self.stage.marks.iter() {
            match mark {
                Mark::Point(point, color) => draw_helper.draw_circle(point, 0.4, *color),
                Mark::Segment(start, end, color) => draw_helper.draw_line(start, end, *color),
                Mark::Outline(outline, color) => draw_helper.draw_outline(outline, *color),
            }
        }

        helper.request_redraw();
    }
}

pub fn run_window(
    title: &str,
    config: ConfigBuilder,
    init: impl FnMut(&mut Stage) + 'static,
    update: impl FnMut(&mut Stage, Option<Point>) + 'static,
) {
    use speedy2d::Window;

    let window = Window::new_centered(title, (1280, 800)).unwrap();

    let config: Config = config.into();

    window.run_loop(Handler {
        stage: Stage::default(),
        init: Box::new(init),
        update: Box::new(update),
        is_paused: config.is_default_paused,
        is_mouse_down: false,
        cursor: None,
        selected_polygon: None,
        config,
        render_offset: (40., 30.).into(),
    });
}
