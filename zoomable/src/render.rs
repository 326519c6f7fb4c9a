// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering capability and per-media adapters.
//!
//! A viewer renders its content layer from a [`ZoomSnapshot`]. The rendering
//! itself is supplied once, as a [`Render`] implementation, and wrapped in a
//! [`MediaAdapter`] for the kind of element being shown. The adapter adds the
//! parts every media kind shares: the layer style and the loading
//! placeholder decision.

use crate::media::MediaKind;
use crate::snapshot::{LayerStyle, ZoomSnapshot};

/// Produces output for the content layer from a snapshot.
pub trait Render {
    /// What rendering yields: a node, a draw list, markup...
    type Output;

    /// Renders the content body for `snapshot`.
    fn render(&self, snapshot: &ZoomSnapshot) -> Self::Output;
}

impl<F, O> Render for F
where
    F: Fn(&ZoomSnapshot) -> O,
{
    type Output = O;

    fn render(&self, snapshot: &ZoomSnapshot) -> O {
        self(snapshot)
    }
}

/// A rendered content layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<O> {
    /// Style to apply to the content layer.
    pub style: LayerStyle,
    /// Rendered body.
    pub body: O,
    /// Show a loading placeholder over the layer.
    pub show_placeholder: bool,
}

/// Wraps a [`Render`] for one kind of media element.
#[derive(Clone, Debug)]
pub struct MediaAdapter<R> {
    kind: MediaKind,
    renderer: R,
}

impl<R: Render> MediaAdapter<R> {
    /// Adapter for an image element.
    pub fn image(renderer: R) -> Self {
        Self::new(MediaKind::Image, renderer)
    }

    /// Adapter for a video element.
    pub fn video(renderer: R) -> Self {
        Self::new(MediaKind::Video, renderer)
    }

    /// Adapter for arbitrary content.
    pub fn content(renderer: R) -> Self {
        Self::new(MediaKind::Content, renderer)
    }

    /// Adapter for the given kind.
    pub fn new(kind: MediaKind, renderer: R) -> Self {
        Self { kind, renderer }
    }

    /// Kind of media this adapter renders.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// The wrapped renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Renders a frame for `snapshot`.
    ///
    /// Images and videos show a placeholder until their dimensions are
    /// known. Generic content is laid out by the host and never waits.
    pub fn frame(&self, snapshot: &ZoomSnapshot) -> Frame<R::Output> {
        let show_placeholder = match self.kind {
            MediaKind::Image | MediaKind::Video => snapshot.is_loading,
            MediaKind::Content => false,
        };
        Frame {
            style: snapshot.layer_style(),
            body: self.renderer.render(snapshot),
            show_placeholder,
        }
    }
}
