//! Order registry and the generic dispatcher.
//!
//! A registry is a plain tuple of [`Order`](super::order::Order) values, up
//! to 32 entries. [`OrderParser`] scans it in declaration order and runs the
//! first entry whose opcode matches the head of the message.
//!
//! Used by the serial task with the prebuilt sets from
//! [`protocol`](super::protocol).
use heapless::Vec;
use log::debug;

use super::order::{Executor, RunOrder};
use crate::ORDER_SET_CAPACITY;

/// A fixed, ordered collection of orders sharing one executor type.
///
/// Sets hold at most [`ORDER_SET_CAPACITY`] entries.
pub trait OrderSet<E: Executor> {
    /// Runs the first entry whose opcode matches. `None` when nothing
    /// matches, or when the matching entry rejects its parameters.
    fn dispatch(&self, executor: &mut E, opcode: u8, params: &[u8]) -> Option<E::Reply>;

    /// Appends every opcode of the set, in declaration order. On overflow
    /// fails with the opcode that did not fit.
    fn push_opcodes<const N: usize>(&self, out: &mut Vec<u8, N>) -> Result<(), u8>;

    /// No two entries may share an opcode; duplicates make all entries after
    /// the first unreachable. Meant for a `debug_assert!` at startup.
    fn opcodes_are_distinct(&self) -> bool {
        let mut opcodes: Vec<u8, ORDER_SET_CAPACITY> = Vec::new();
        if self.push_opcodes(&mut opcodes).is_err() {
            return false;
        }
        for (index, opcode) in opcodes.iter().enumerate() {
            if opcodes[..index].contains(opcode) {
                return false;
            }
        }
        true
    }
}

macro_rules! peel_order_set {
    (($ty0:ident, $val0:ident) $(, ($ty:ident, $val:ident))*) => {
        impl_order_set! { $(($ty, $val)),* }
    };
}

macro_rules! impl_order_set {
    () => {};
    ($(($ty:ident, $val:ident)),+) => {
        impl<E: Executor, $($ty: RunOrder<E>),+> OrderSet<E> for ($($ty,)+) {
            fn dispatch(&self, executor: &mut E, opcode: u8, params: &[u8]) -> Option<E::Reply> {
                let ($($val,)+) = self;
                $(
                    if $val.opcode() == opcode {
                        return $val.run(executor, params);
                    }
                )+
                None
            }

            fn push_opcodes<const N: usize>(&self, out: &mut Vec<u8, N>) -> Result<(), u8> {
                let ($($val,)+) = self;
                $(out.push($val.opcode())?;)+
                Ok(())
            }
        }

        peel_order_set! { $(($ty, $val)),+ }
    };
}

impl_order_set! {
    (O1, o1), (O2, o2), (O3, o3), (O4, o4), (O5, o5), (O6, o6), (O7, o7), (O8, o8),
    (O9, o9), (O10, o10), (O11, o11), (O12, o12), (O13, o13), (O14, o14), (O15, o15),
    (O16, o16), (O17, o17), (O18, o18), (O19, o19), (O20, o20), (O21, o21), (O22, o22),
    (O23, o23), (O24, o24), (O25, o25), (O26, o26), (O27, o27), (O28, o28), (O29, o29),
    (O30, o30), (O31, o31), (O32, o32)
}

/// Drives an executor from serialized orders.
///
/// One message per call, already delimited by the transport. The opcode is
/// the first byte, parameters start after the opcode's own delimiter.
pub struct OrderParser<'a, E: Executor> {
    executor: &'a mut E,
}

impl<'a, E: Executor> OrderParser<'a, E> {
    pub fn new(executor: &'a mut E) -> Self {
        Self { executor }
    }

    /// Runs `message` against `orders`. `None` when the message is empty, no
    /// opcode matches, or the matching order rejects its parameters.
    pub fn parse_and_run<S>(&mut self, orders: &S, message: &[u8]) -> Option<E::Reply>
    where
        S: OrderSet<E>,
    {
        let Some((&opcode, _)) = message.split_first() else {
            debug!("empty message, nothing to dispatch");
            return None;
        };
        let params = message.get(2..).unwrap_or(&[]);

        let reply = orders.dispatch(self.executor, opcode, params);
        if reply.is_none() {
            debug!("no order ran for opcode '{}'", opcode as char);
        }
        reply
    }
}
