//! Descriptor rendering in generics-declaration syntax.
//!
//! `Raw<A, B>`, `Component[]`, `?`, `? extends X`, `? super X`. Owner types
//! are not rendered, and a parameterized type without arguments renders as
//! its raw type. Class names come from the `Reflect` implementation, which
//! is why rendering takes one.

use std::fmt;

use super::{Shape, TypeDescriptor};
use crate::Reflect;

/// Render `desc` as a string.
pub fn render<R: Reflect + ?Sized>(reflect: &R, desc: &TypeDescriptor) -> String {
    let mut buf = String::new();
    // Writing into a `String` cannot fail.
    let _ = render_into(reflect, desc, &mut buf);
    buf
}

/// Render `desc` into any `fmt::Write` sink.
pub fn render_into<R, W>(reflect: &R, desc: &TypeDescriptor, out: &mut W) -> fmt::Result
where
    R: Reflect + ?Sized,
    W: fmt::Write + ?Sized,
{
    match desc.shape() {
        Shape::Named(class) => match reflect.class_name(class) {
            Some(name) => out.write_str(name),
            None => write!(out, "{class}"),
        },
        Shape::ArrayOf(component) => {
            render_into(reflect, component, out)?;
            out.write_str("[]")
        }
        Shape::Parameterized { raw, args, .. } => {
            render_into(reflect, raw, out)?;
            if args.is_empty() {
                return Ok(());
            }
            out.write_char('<')?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                render_into(reflect, arg, out)?;
            }
            out.write_char('>')
        }
        Shape::Wildcard {
            lower: Some(lower), ..
        } => {
            out.write_str("? super ")?;
            render_into(reflect, lower, out)
        }
        Shape::Wildcard { upper, lower: None } => {
            if upper.is_object() {
                out.write_char('?')
            } else {
                out.write_str("? extends ")?;
                render_into(reflect, upper, out)
            }
        }
        Shape::Variable(var) => out.write_str(&var.name),
    }
}

/// `Display` adapter pairing a descriptor with the metadata naming its classes.
pub struct DisplayDescriptor<'a, R: ?Sized> {
    desc: &'a TypeDescriptor,
    reflect: &'a R,
}

impl<R: Reflect + ?Sized> fmt::Display for DisplayDescriptor<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_into(self.reflect, self.desc, f)
    }
}

impl TypeDescriptor {
    /// Pair this descriptor with `reflect` for use with `{}`.
    pub fn display<'a, R: Reflect + ?Sized>(&'a self, reflect: &'a R) -> DisplayDescriptor<'a, R> {
        DisplayDescriptor {
            desc: self,
            reflect,
        }
    }
}
