//! Order descriptors binding an opcode to a typed handler.
//!
//! [`order`] couples a single-character opcode with any handler taking
//! `&mut E` plus parameters the tokenizer knows how to decode; the parameter
//! signature is inferred from the handler itself. [`RunOrder`] is the
//! uniform run-from-raw-bytes interface the registry scans over.
use core::marker::PhantomData;

use super::params::{Parameter, ParameterSet};

/// Handler-side contract of a dispatch target.
///
/// `Reply` is the one result type every handler of an executor shares. Unit
/// works for executors that answer out of band.
pub trait Executor {
    type Reply;
}

/// A handler callable with an argument tuple decoded off the wire.
///
/// Implemented for plain functions, trait methods and capture-free closures
/// of shape `Fn(&mut E, ...) -> E::Reply`, up to eight parameters.
pub trait Callback<E: Executor, Args>: Copy {
    fn invoke(&self, executor: &mut E, args: Args) -> E::Reply;
}

macro_rules! impl_callback {
    ($(($ty:ident, $val:ident)),*) => {
        impl<E, F, $($ty),*> Callback<E, ($($ty,)*)> for F
        where
            E: Executor,
            F: Copy + Fn(&mut E, $($ty),*) -> E::Reply,
            $($ty: Parameter,)*
        {
            fn invoke(&self, executor: &mut E, args: ($($ty,)*)) -> E::Reply {
                let ($($val,)*) = args;
                self(executor, $($val),*)
            }
        }
    };
}

impl_callback!();
impl_callback!((P1, p1));
impl_callback!((P1, p1), (P2, p2));
impl_callback!((P1, p1), (P2, p2), (P3, p3));
impl_callback!((P1, p1), (P2, p2), (P3, p3), (P4, p4));
impl_callback!((P1, p1), (P2, p2), (P3, p3), (P4, p4), (P5, p5));
impl_callback!((P1, p1), (P2, p2), (P3, p3), (P4, p4), (P5, p5), (P6, p6));
impl_callback!(
    (P1, p1),
    (P2, p2),
    (P3, p3),
    (P4, p4),
    (P5, p5),
    (P6, p6),
    (P7, p7)
);
impl_callback!(
    (P1, p1),
    (P2, p2),
    (P3, p3),
    (P4, p4),
    (P5, p5),
    (P6, p6),
    (P7, p7),
    (P8, p8)
);

/// One registry entry: an opcode and the handler bound to it.
#[derive(Clone, Copy)]
pub struct Order<F, Args> {
    opcode: u8,
    callback: F,
    _args: PhantomData<Args>,
}

/// Binds `opcode` to `callback`, inferring the parameter signature from the
/// callback type.
pub fn order<E, Args, F>(opcode: u8, callback: F) -> Order<F, Args>
where
    E: Executor,
    F: Callback<E, Args>,
{
    Order {
        opcode,
        callback,
        _args: PhantomData,
    }
}

/// Type-erased view of an [`Order`]: its opcode, and running it against raw
/// parameter bytes.
pub trait RunOrder<E: Executor> {
    fn opcode(&self) -> u8;

    /// Assembles the parameters and invokes the handler, or returns `None`
    /// without invoking anything when assembly fails.
    fn run(&self, executor: &mut E, params: &[u8]) -> Option<E::Reply>;
}

impl<E, F, Args> RunOrder<E> for Order<F, Args>
where
    E: Executor,
    F: Callback<E, Args>,
    Args: ParameterSet,
{
    fn opcode(&self) -> u8 {
        self.opcode
    }

    fn run(&self, executor: &mut E, params: &[u8]) -> Option<E::Reply> {
        let args = Args::parse_all(params)?;
        Some(self.callback.invoke(executor, args))
    }
}
