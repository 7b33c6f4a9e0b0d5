//! Member lookup along the super chain.
//!
//! Resolution rules:
//! - The most-derived declaration wins. A walk stops at the first level that
//!   declares the member; ancestors' declarations of the same name are never
//!   merged in.
//! - For methods, each level is checked for an instance method first and a
//!   static method second before moving to the parent. A static method on a
//!   derived class therefore beats an instance method on its parent.
//! - "Not found" is `None`, whether the type or the member is missing.

use std::ops::ControlFlow;

use nomina_index::{FieldDef, MethodDef, TypeSet};
use tracing::debug;

use crate::session::ResolveSession;
use crate::super_type::SuperTypeResolver;

pub struct MemberResolver<'s, 'a> {
    session: &'s mut ResolveSession<'a>,
}

impl<'s, 'a> MemberResolver<'s, 'a> {
    pub fn new(session: &'s mut ResolveSession<'a>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &ResolveSession<'a> {
        &*self.session
    }

    /// The nearest declaration of field `name` on `root` or its ancestors.
    pub fn find_field<T>(&mut self, root: &T, name: &str) -> Option<FieldDef>
    where
        T: SuperTypeResolver + ?Sized,
    {
        let index = self.session.index();
        let ctx = self.session.context();
        let found = self.session.walk_chain(root, |level| {
            match index.find_field(level.name, name, &ctx) {
                Some(field) => ControlFlow::Break(field),
                None => ControlFlow::Continue(()),
            }
        });
        debug!(
            class = root.class_name(),
            field = name,
            owner = found.as_ref().map(|field| field.class_name.as_str()),
            "find_field"
        );
        found
    }

    /// The nearest declaration of method `name`, instance before static at
    /// each level.
    pub fn find_method<T>(&mut self, root: &T, name: &str) -> Option<MethodDef>
    where
        T: SuperTypeResolver + ?Sized,
    {
        let index = self.session.index();
        let ctx = self.session.context();
        let found = self.session.walk_chain(root, |level| {
            let method = index
                .find_method(level.name, name, &ctx)
                .or_else(|| index.find_static_method(level.name, name, &ctx));
            match method {
                Some(method) => ControlFlow::Break(method),
                None => ControlFlow::Continue(()),
            }
        });
        debug!(
            class = root.class_name(),
            method = name,
            owner = found.as_ref().map(|method| method.class_name.as_str()),
            is_static = found.as_ref().map(|method| method.is_static),
            "find_method"
        );
        found
    }

    /// Inferred types of the nearest field named `name`.
    ///
    /// The walk stops at the first level declaring the field even when that
    /// declaration carries no type information; an ancestor's types for a
    /// shadowed field are never used.
    pub fn guess_field_type<T>(&mut self, root: &T, name: &str) -> Option<TypeSet>
    where
        T: SuperTypeResolver + ?Sized,
    {
        let index = self.session.index();
        let ctx = self.session.context();
        self.session
            .walk_chain(root, |level| match index.find_field(level.name, name, &ctx) {
                Some(field) => ControlFlow::Break(field.types),
                None => ControlFlow::Continue(()),
            })
            .flatten()
    }

    /// Class names of the chain of `root`, most-derived first.
    pub fn super_chain<T>(&mut self, root: &T) -> Vec<String>
    where
        T: SuperTypeResolver + ?Sized,
    {
        self.session.super_chain(root).into_vec()
    }
}

#[cfg(test)]
#[path = "../tests/member_resolver_tests.rs"]
mod tests;
