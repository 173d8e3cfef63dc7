//! Handler decorators.
//!
//! A [`Decorator`] turns one value into another, in practice a handler into a
//! wrapping handler. Decorators chain with [`DecoratorExt::and_then`] and are
//! applied to every route of a table through
//! [`RouteTableBuilder::with_global_decorator`](crate::router::RouteTableBuilder::with_global_decorator).
//!
//! Besides the building blocks here, [`TraceDecorator`] logs every call and
//! [`RequireTokenDecorator`](crate::router::filter::RequireTokenDecorator)
//! puts a whole table behind a token.

mod trace;

pub use trace::{TraceDecorator, TracedHandler};

use std::fmt;
use std::fmt::{Debug, Formatter};

pub trait Decorator<In> {
    type Out;

    fn decorate(&self, raw: In) -> Self::Out;
}

pub trait DecoratorExt<In>: Decorator<In> {
    /// Runs `self` first, then `decorator` on its output
    fn and_then<D>(self, decorator: D) -> DecoratorComposer<Self, D>
    where
        Self: Sized,
    {
        DecoratorComposer::new(self, decorator)
    }

    /// Runs `decorator` first, then `self` on its output
    fn compose<D>(self, decorator: D) -> DecoratorComposer<D, Self>
    where
        Self: Sized,
    {
        DecoratorComposer::new(decorator, self)
    }
}

impl<T: Decorator<In> + ?Sized, In> DecoratorExt<In> for T {}

/// Leaves its input untouched, the starting point of every route table builder
#[derive(Default, Clone, Copy, Debug)]
pub struct IdentityDecorator;

impl<In> Decorator<In> for IdentityDecorator {
    type Out = In;

    #[inline(always)]
    fn decorate(&self, raw: In) -> Self::Out {
        raw
    }
}

/// `outer` applied to the result of `inner`
#[derive(Default, Debug, Clone, Copy)]
pub struct DecoratorComposer<Inner, Outer> {
    inner: Inner,
    outer: Outer,
}

impl<Inner, Outer> DecoratorComposer<Inner, Outer> {
    pub fn new(inner: Inner, outer: Outer) -> Self {
        Self { inner, outer }
    }
}

impl<In, Inner, Outer> Decorator<In> for DecoratorComposer<Inner, Outer>
where
    Inner: Decorator<In>,
    Outer: Decorator<Inner::Out>,
{
    type Out = Outer::Out;

    fn decorate(&self, raw: In) -> Self::Out {
        self.outer.decorate(self.inner.decorate(raw))
    }
}

/// A [`Decorator`] backed by a closure, see [`decorator_fn`]
#[derive(Clone, Copy)]
pub struct DecoratorFn<F> {
    f: F,
}

/// Creates a [`Decorator`] from a closure.
///
/// The closure receives the handler being decorated, boxed as
/// `Box<dyn RequestHandler>` when used as a global decorator.
pub fn decorator_fn<In, Out, F>(f: F) -> DecoratorFn<F>
where
    F: Fn(In) -> Out,
{
    DecoratorFn { f }
}

impl<In, Out, F> Decorator<In> for DecoratorFn<F>
where
    F: Fn(In) -> Out,
{
    type Out = Out;

    #[inline]
    fn decorate(&self, raw: In) -> Self::Out {
        (self.f)(raw)
    }
}

impl<F> Debug for DecoratorFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoratorFn").finish_non_exhaustive()
    }
}
