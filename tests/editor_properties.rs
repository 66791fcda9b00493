use pixelpad::editor::{
    ColorValue, DEFAULT_COLORS, EditorOptions, EditorState, PaintMode, Palette,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Select(usize),
    Mode(PaintMode),
    Paint(usize),
    Drag(usize),
    Dragging(bool),
    Grow,
    Shrink,
    RequestClear,
    CancelClear,
    ConfirmClear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..8).prop_map(Op::Select),
        prop_oneof![Just(PaintMode::Single), Just(PaintMode::Flood)].prop_map(Op::Mode),
        (0usize..200).prop_map(Op::Paint),
        (0usize..200).prop_map(Op::Drag),
        any::<bool>().prop_map(Op::Dragging),
        Just(Op::Grow),
        Just(Op::Shrink),
        Just(Op::RequestClear),
        Just(Op::CancelClear),
        Just(Op::ConfirmClear),
    ]
}

fn apply(state: EditorState, op: &Op) -> EditorState {
    match *op {
        Op::Select(i) => state.select_color(DEFAULT_COLORS[i]),
        Op::Mode(mode) => state.set_paint_mode(mode),
        Op::Paint(id) => state.paint_pixel(id),
        Op::Drag(id) => state.drag_paint(id),
        Op::Dragging(value) => state.set_dragging(value),
        Op::Grow => state.increase_size(),
        Op::Shrink => state.decrease_size(),
        Op::RequestClear => state.request_clear(),
        Op::CancelClear => state.cancel_clear(),
        Op::ConfirmClear => state.confirm_clear(),
    }
}

fn state_with_size(size: usize) -> EditorState {
    EditorState::new(EditorOptions::new(size, Palette::default()).unwrap())
}

fn colors(state: &EditorState) -> Vec<ColorValue> {
    state.grid().pixels().iter().map(|p| p.color).collect()
}

proptest! {
    #[test]
    fn prop_grid_stays_well_formed(
        size in 1usize..12,
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let mut state = state_with_size(size);
        for op in &ops {
            state = apply(state, op);
            let grid = state.grid();
            prop_assert!(state.size() >= 1);
            prop_assert_eq!(grid.len(), state.size() * state.size());
            for (i, pixel) in grid.pixels().iter().enumerate() {
                prop_assert_eq!(pixel.id, i);
                prop_assert!(state.palette().contains(pixel.color));
            }
            prop_assert!(state.palette().contains(state.selected_color()));
        }
    }

    #[test]
    fn prop_flood_is_idempotent(
        size in 1usize..10,
        paints in prop::collection::vec((0usize..8, 0usize..100), 0..30),
        target in 0usize..100,
    ) {
        let mut state = state_with_size(size);
        for (color, id) in paints {
            state = state.select_color(DEFAULT_COLORS[color]).paint_pixel(id);
        }
        let once = state.set_paint_mode(PaintMode::Flood).paint_pixel(target);
        let twice = once.clone().paint_pixel(target);
        prop_assert_eq!(colors(&once), colors(&twice));
    }

    #[test]
    fn prop_flood_leaves_no_target_color(
        size in 1usize..10,
        paints in prop::collection::vec((0usize..8, 0usize..100), 0..30),
        target in 0usize..100,
        color in 0usize..8,
    ) {
        let mut state = state_with_size(size);
        for (c, id) in paints {
            state = state.select_color(DEFAULT_COLORS[c]).paint_pixel(id);
        }
        let id = target % state.grid().len();
        let target_color = state.grid().get(id).unwrap().color;
        let before = colors(&state);
        let after_state = state
            .select_color(DEFAULT_COLORS[color])
            .set_paint_mode(PaintMode::Flood)
            .paint_pixel(id);
        let after = colors(&after_state);

        for (old, new) in before.iter().zip(&after) {
            if *old == target_color {
                prop_assert_eq!(*new, DEFAULT_COLORS[color]);
            } else {
                prop_assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn prop_grow_then_shrink_restores_pixels(
        size in 1usize..15,
        paints in prop::collection::vec((0usize..8, 0usize..225), 0..40),
    ) {
        let mut state = state_with_size(size);
        for (c, id) in paints {
            state = state.select_color(DEFAULT_COLORS[c]).paint_pixel(id);
        }
        let before = colors(&state);
        let round_trip = state.increase_size().decrease_size();
        prop_assert_eq!(round_trip.size(), size);
        prop_assert_eq!(colors(&round_trip), before);
    }

    #[test]
    fn prop_shrink_never_goes_below_one(steps in 0usize..30, size in 1usize..8) {
        let mut state = state_with_size(size);
        for _ in 0..steps {
            state = state.decrease_size();
        }
        prop_assert_eq!(state.size(), size.saturating_sub(steps).max(1));
    }

    #[test]
    fn prop_confirmed_clear_restores_startup_canvas(
        size in 1usize..10,
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut state = state_with_size(size);
        for op in &ops {
            state = apply(state, op);
        }
        let cleared = state.request_clear().confirm_clear();
        prop_assert_eq!(cleared.size(), size);
        prop_assert_eq!(
            cleared.grid().count_color(DEFAULT_COLORS[0]),
            size * size
        );
        prop_assert!(!cleared.confirm_pending());
    }
}

// --- Walkthroughs ---

#[test]
fn test_single_paint_on_fresh_canvas() {
    let state = EditorState::default()
        .select_color(DEFAULT_COLORS[1])
        .paint_pixel(0);
    assert_eq!(state.grid().get(0).unwrap().color, DEFAULT_COLORS[1]);
    assert_eq!(state.grid().count_color(DEFAULT_COLORS[0]), 99);
}

#[test]
fn test_flood_recolors_disconnected_islands() {
    let red = DEFAULT_COLORS[1];
    let blue = DEFAULT_COLORS[5];
    let state = state_with_size(3)
        .select_color(red)
        .paint_pixel(0)
        .paint_pixel(8)
        .select_color(blue)
        .set_paint_mode(PaintMode::Flood)
        .paint_pixel(0);

    assert_eq!(state.grid().get(0).unwrap().color, blue);
    assert_eq!(state.grid().get(8).unwrap().color, blue);
    assert_eq!(state.grid().count_color(DEFAULT_COLORS[0]), 7);
}

#[test]
fn test_grow_rewraps_existing_pixels() {
    let red = DEFAULT_COLORS[1];
    let state = state_with_size(2)
        .select_color(red)
        .paint_pixel(2)
        .increase_size();

    assert_eq!(state.size(), 3);
    assert_eq!(state.grid().len(), 9);
    // Flat index 2 now sits at the end of the first row.
    assert_eq!(state.grid().pixel_at(0, 2).unwrap().color, red);
    assert_eq!(state.grid().pixel_at(1, 0).unwrap().color, DEFAULT_COLORS[0]);
}

#[test]
fn test_drag_paint_only_while_dragging() {
    let green = DEFAULT_COLORS[3];
    let state = state_with_size(4)
        .select_color(green)
        .drag_paint(1)
        .set_dragging(true)
        .drag_paint(2)
        .drag_paint(3)
        .set_dragging(false)
        .drag_paint(4);

    let painted: Vec<usize> = state
        .grid()
        .pixels()
        .iter()
        .filter(|p| p.color == green)
        .map(|p| p.id)
        .collect();
    assert_eq!(painted, vec![2, 3]);
}

#[test]
fn test_clear_returns_to_startup_size_and_keeps_selection() {
    let yellow = DEFAULT_COLORS[2];
    let state = state_with_size(5)
        .select_color(yellow)
        .set_paint_mode(PaintMode::Flood)
        .paint_pixel(0)
        .increase_size()
        .increase_size()
        .request_clear()
        .confirm_clear();

    assert_eq!(state.size(), 5);
    assert_eq!(state.grid().count_color(DEFAULT_COLORS[0]), 25);
    assert_eq!(state.selected_color(), yellow);
    assert_eq!(state.paint_mode(), PaintMode::Flood);
}
