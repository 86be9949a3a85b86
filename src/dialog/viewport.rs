use crate::fetch::SizeFetcher;
use crate::session::SessionContext;
use crate::transform::{self, CommandSource, leading_number};

/// Units of scale or rotation applied per wheel tick.
pub const WHEEL_STEP: f64 = 10.0;
/// Wheel zoom never goes below this scale.
pub const MIN_WHEEL_SCALE: f64 = 1.0;

/// One wheel tick over the dialog viewport: zoom without a modifier, rotate
/// with shift held. Both go through the engine as dialog-origin commands.
pub fn wheel(
    session: &mut SessionContext,
    increase: bool,
    rotate: bool,
    fetcher: &dyn SizeFetcher,
) -> bool {
    let Some(subject) = session.dialog.subject else {
        return false;
    };
    // Dialog interactions always address the dialog's subject.
    session.current = Some(subject);
    let state = session.store.entry(subject).clone();

    let command = if rotate {
        let angle = leading_number(&state.rotate);
        let next = if increase {
            angle + WHEEL_STEP
        } else {
            angle - WHEEL_STEP
        };
        // Wrap into [0, 360): 350 + 10 lands on 0, 0 - 10 on 350.
        format!("{}deg", next.rem_euclid(360.0))
    } else {
        let next = if increase {
            state.scale + WHEEL_STEP
        } else {
            state.scale - WHEEL_STEP
        };
        format!("{}%", next.max(MIN_WHEEL_SCALE))
    };

    transform::apply(session, &command, CommandSource::DialogControl, fetcher)
}

/// Pans the dialog viewport by a raw pixel delta from a drag.
pub fn pan(session: &mut SessionContext, delta_x: f64, delta_y: f64) {
    session.dialog.scroll.0 = (session.dialog.scroll.0 - delta_x).max(0.0);
    session.dialog.scroll.1 = (session.dialog.scroll.1 - delta_y).max(0.0);
    session.dialog.scroll_dirty = true;
}
