use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures_core::future::FusedFuture;
use serr::async_ext::WrapFuture;

#[test]
fn wrap_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<WrapFuture<std::future::Ready<Result<(), ()>>, fn() -> serr::Context>>();
    assert_sync::<WrapFuture<std::future::Ready<Result<(), ()>>, fn() -> serr::Context>>();
}

struct PendingFuture;
impl Future for PendingFuture {
    type Output = Result<i32, &'static str>;
    fn poll(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        Poll::Pending
    }
}

struct ReadyErr(bool);
impl Future for ReadyErr {
    type Output = Result<i32, &'static str>;
    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.0 = true;
        Poll::Ready(Err("failed"))
    }
}
impl FusedFuture for ReadyErr {
    fn is_terminated(&self) -> bool {
        self.0
    }
}

fn noop_context<R>(f: impl FnOnce(&mut Context<'_>) -> R) -> R {
    use core::task::{RawWaker, RawWakerVTable, Waker};

    fn noop(_: *const ()) {}
    fn clone(p: *const ()) -> RawWaker {
        RawWaker::new(p, &VTABLE)
    }
    static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
    let raw_waker = RawWaker::new(core::ptr::null(), &VTABLE);
    let waker = unsafe { Waker::from_raw(raw_waker) };

    let mut cx = Context::from_waker(&waker);
    f(&mut cx)
}

#[test]
fn pending_inner_future_stays_pending() {
    let mut wrapped = WrapFuture::new(PendingFuture, || -> serr::Context {
        panic!("context built while pending")
    });
    let mut wrapped = Pin::new(&mut wrapped);

    noop_context(|cx| {
        assert!(wrapped.as_mut().poll(cx).is_pending());
    });
}

#[test]
fn error_completion_terminates() {
    let mut wrapped = WrapFuture::new(ReadyErr(false), || serr::context! { "step" => [1] });
    assert!(!wrapped.is_terminated());

    let output = noop_context(|cx| Pin::new(&mut wrapped).poll(cx));
    match output {
        Poll::Ready(Err(err)) => {
            assert_eq!(err.to_string(), "Error: failed\nContext: {\"step\":[1]}");
        },
        other => panic!("unexpected poll result: {other:?}"),
    }
    assert!(wrapped.is_terminated());
}
