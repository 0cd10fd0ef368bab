// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Xilem View wrapper for CanvasWidget

use super::{CanvasWidget, SessionUpdate};
use crate::editing::EditSession;
use std::marker::PhantomData;
use std::sync::Arc;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Create a canvas view from an edit session with a callback for
/// session updates.
///
/// The callback receives the updated session after each completed
/// gesture (release or scroll).
pub fn canvas_view<State, F>(session: Arc<EditSession>, on_session_update: F) -> CanvasView<State, F>
where
    F: Fn(&mut State, EditSession),
{
    CanvasView {
        session,
        on_session_update,
        phantom: PhantomData,
    }
}

/// The Xilem View for CanvasWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct CanvasView<State, F> {
    session: Arc<EditSession>,
    on_session_update: F,
    phantom: PhantomData<fn() -> State>,
}

impl<State, F> ViewMarker for CanvasView<State, F> {}

impl<State: 'static, F: Fn(&mut State, EditSession) + 'static> View<State, (), ViewCtx>
    for CanvasView<State, F>
{
    type Element = Pod<CanvasWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = CanvasWidget::new(self.session.clone());
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        // The session the widget emitted is the one the app state holds,
        // so a wholesale replacement is lossless. Transient widget state
        // (press tracking) is untouched.
        if !Arc::ptr_eq(&self.session, &prev.session) {
            let mut widget = element.downcast::<CanvasWidget>();
            widget.widget.session = (*self.session).clone();
            widget.ctx.request_render();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
        // No cleanup needed
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<()> {
        match message.take_message::<SessionUpdate>() {
            Some(update) => {
                (self.on_session_update)(app_state, update.session);
                MessageResult::Action(())
            }
            None => MessageResult::Stale,
        }
    }
}
