// src/board.rs
// druid side of the board: mouse events in, invalidation and painting out.

use druid::widget::{Button, ZStack};
use druid::{
    BoxConstraints, Color, Data, Env, Event, EventCtx, LayoutCtx, Lens, LifeCycle, LifeCycleCtx,
    MouseEvent, PaintCtx, Rect, RenderContext, Size, UnitPoint, UpdateCtx, Widget, WidgetExt,
};
use rectboard::config::Config;
use rectboard::{Canvas, DrawingSession, Point, PointerEvent, Rectangle};

const RECT_COLOR: Color = Color::BLACK;
const BACKGROUND_COLOR: Color = Color::WHITE;

#[derive(Clone, Default, Data, Lens)]
pub struct AppState {
    /// 是否允许绘制，由顶部的切换按钮控制
    pub draw_mode: bool,
}

/// Full-window drawing surface. Owns the session; druid only sees `AppState`.
#[derive(Default)]
pub struct BoardWidget {
    session: DrawingSession,
}

impl BoardWidget {
    pub fn new() -> Self {
        BoardWidget { session: DrawingSession::new() }
    }
}

/// Draw commands become invalidated regions; `paint` redraws from the registry.
struct Invalidate<'a, 'b, 'c>(&'a mut EventCtx<'b, 'c>);

impl Canvas for Invalidate<'_, '_, '_> {
    fn fill_and_outline_rectangle(&mut self, rect: Rectangle) {
        // 加一些外边距，确保描边也刷新
        self.0.request_paint_rect(to_druid_rect(rect).inflate(1.0, 1.0));
    }
}

fn to_druid_rect(rect: Rectangle) -> Rect {
    Rect::new(
        rect.left as f64,
        rect.top as f64,
        rect.right() as f64,
        rect.bottom() as f64,
    )
}

fn pointer_event(event: &Event) -> Option<PointerEvent> {
    match event {
        Event::MouseDown(e) if e.button.is_left() => Some(PointerEvent::Down(position(e))),
        Event::MouseUp(e) if e.button.is_left() => Some(PointerEvent::Up(position(e))),
        _ => None,
    }
}

/// The repeat press of a double click. It is still a press of its own and is
/// reported by `pointer_event` too.
fn double_click(event: &Event) -> Option<PointerEvent> {
    match event {
        Event::MouseDown(e) if e.button.is_left() && e.count >= 2 => {
            Some(PointerEvent::DoubleClick(position(e)))
        }
        _ => None,
    }
}

/// Active from press to release, so the release arrives even off the board.
fn holds_pointer(pointer: PointerEvent) -> Option<bool> {
    match pointer {
        PointerEvent::Down(_) => Some(true),
        PointerEvent::Up(_) => Some(false),
        PointerEvent::DoubleClick(_) => None,
    }
}

fn position(e: &MouseEvent) -> Point {
    Point::from_f64(e.pos.x, e.pos.y)
}

impl Widget<AppState> for BoardWidget {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppState, _env: &Env) {
        let Some(pointer) = pointer_event(event) else {
            return;
        };

        if let Some(active) = holds_pointer(pointer) {
            ctx.set_active(active);
        }

        self.session.handle(pointer, data.draw_mode, &mut Invalidate(ctx));
        if let Some(repeat) = double_click(event) {
            self.session.handle(repeat, data.draw_mode, &mut Invalidate(ctx));
        }
    }

    fn lifecycle(
        &mut self,
        _ctx: &mut LifeCycleCtx,
        _event: &LifeCycle,
        _data: &AppState,
        _env: &Env,
    ) {
    }

    fn update(&mut self, _ctx: &mut UpdateCtx, _old: &AppState, _data: &AppState, _env: &Env) {}

    fn layout(&mut self, _ctx: &mut LayoutCtx, bc: &BoxConstraints, _data: &AppState, _env: &Env) -> Size {
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx, _data: &AppState, _env: &Env) {
        let full_rect = ctx.size().to_rect();
        ctx.fill(full_rect, &BACKGROUND_COLOR);

        for rect in self.session.registry().iter() {
            let r = to_druid_rect(*rect);
            ctx.fill(r, &RECT_COLOR);
            ctx.stroke(r, &RECT_COLOR, 1.0);
        }
    }
}

/// The board with the draw-mode toggle laid over its top center.
pub fn build_ui(config: &Config) -> impl Widget<AppState> + use<> {
    let start_label = config.start_label.clone();
    let stop_label = config.stop_label.clone();

    let toggle = Button::dynamic(move |drawing: &bool, _env: &Env| {
        if *drawing { stop_label.clone() } else { start_label.clone() }
    })
    .on_click(|_ctx, drawing: &mut bool, _env| *drawing = !*drawing)
    .fix_size(config.toggle_width, config.toggle_height)
    .lens(AppState::draw_mode);

    ZStack::new(BoardWidget::new()).with_aligned_child(toggle, UnitPoint::TOP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use druid::{Modifiers, MouseButton, MouseButtons, Vec2};
    use rectboard::GestureOutcome;

    fn mouse(x: f64, y: f64, button: MouseButton, count: u8) -> MouseEvent {
        let pos = druid::Point::new(x, y);
        MouseEvent {
            pos,
            window_pos: pos,
            buttons: MouseButtons::new(),
            mods: Modifiers::empty(),
            count,
            focus: false,
            button,
            wheel_delta: Vec2::ZERO,
        }
    }

    #[test]
    fn maps_left_button_events() {
        let down = Event::MouseDown(mouse(10.2, 19.7, MouseButton::Left, 1));
        assert_eq!(pointer_event(&down), Some(PointerEvent::Down(Point::new(10, 20))));

        let up = Event::MouseUp(mouse(30.0, 40.0, MouseButton::Left, 1));
        assert_eq!(pointer_event(&up), Some(PointerEvent::Up(Point::new(30, 40))));

        assert_eq!(double_click(&down), None);
        assert_eq!(double_click(&up), None);
    }

    #[test]
    fn repeat_press_is_still_a_press() {
        let repeat = Event::MouseDown(mouse(6.0, 6.0, MouseButton::Left, 2));
        assert_eq!(pointer_event(&repeat), Some(PointerEvent::Down(Point::new(6, 6))));
        assert_eq!(double_click(&repeat), Some(PointerEvent::DoubleClick(Point::new(6, 6))));
    }

    #[test]
    fn quick_second_drag_is_committed() {
        struct NoCanvas;
        impl Canvas for NoCanvas {
            fn fill_and_outline_rectangle(&mut self, _rect: Rectangle) {}
        }

        let mut session = DrawingSession::new();
        let events = [
            Event::MouseDown(mouse(5.0, 5.0, MouseButton::Left, 1)),
            Event::MouseUp(mouse(5.0, 5.0, MouseButton::Left, 1)),
            Event::MouseDown(mouse(6.0, 6.0, MouseButton::Left, 2)),
            Event::MouseUp(mouse(60.0, 60.0, MouseButton::Left, 2)),
        ];

        let mut last = None;
        for event in &events {
            for pointer in pointer_event(event).into_iter().chain(double_click(event)) {
                last = Some(session.handle(pointer, true, &mut NoCanvas));
            }
        }

        assert_eq!(last, Some(GestureOutcome::Committed(Rectangle::new(6, 6, 54, 54))));
        assert!(session.registry().as_slice().contains(&Rectangle::new(6, 6, 54, 54)));
    }

    #[test]
    fn board_holds_pointer_between_press_and_release() {
        let press = pointer_event(&Event::MouseDown(mouse(1.0, 1.0, MouseButton::Left, 1)));
        let release = pointer_event(&Event::MouseUp(mouse(900.0, -4.0, MouseButton::Left, 1)));

        assert_eq!(press.and_then(holds_pointer), Some(true));
        assert_eq!(release.and_then(holds_pointer), Some(false));
        assert_eq!(holds_pointer(PointerEvent::DoubleClick(Point::new(1, 1))), None);
    }

    #[test]
    fn ignores_other_buttons() {
        let right = Event::MouseDown(mouse(1.0, 1.0, MouseButton::Right, 1));
        assert_eq!(pointer_event(&right), None);

        let middle = Event::MouseUp(mouse(1.0, 1.0, MouseButton::Middle, 1));
        assert_eq!(pointer_event(&middle), None);
    }

    #[test]
    fn converts_to_druid_rect() {
        let rect = to_druid_rect(Rectangle::new(10, 30, 40, 20));
        assert_eq!(rect, Rect::new(10.0, 30.0, 50.0, 50.0));
    }
}
