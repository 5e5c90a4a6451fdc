//! Swift source rendering for a generated module.
//!
//! Every wrapper becomes an `@objc public class …: NSObject` holding the
//! original value in `wrappedInstance`. The adoption initializer is internal
//! and unattributed; everything that forwards is `@objc public`.

mod config;


use wrapgen_core::DeclKind;

pub use config::Config;

use crate::emit::GeneratedModule;
use crate::filter::Strategy;
use crate::wrapper::{
    GeneratedDecl, TupleAccessor, TupleWrapperDecl, WrappedType, WrapperDecl, WrapperInit,
    WrapperMember, WrapperMemberKind, WrapperParam,
};

/// Render `module` as one Swift source file.
pub fn render_swift(module: &GeneratedModule, config: &Config) -> String {
    let mut renderer = Renderer::new(config);
    renderer.file(module);
    renderer.output
}

struct Renderer<'c> {
    config: &'c Config,
    output: String,
}

/// Where a forwarded member is looked up.
enum Receiver<'a> {
    Instance,
    Type(&'a str),
}

impl Receiver<'_> {
    fn access(&self, name: &str) -> String {
        match self {
            Self::Instance => format!("wrappedInstance.{name}"),
            Self::Type(ty) => format!("{ty}.{name}"),
        }
    }
}

impl<'c> Renderer<'c> {
    fn new(config: &'c Config) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        if !text.is_empty() {
            self.output.push_str(&" ".repeat(depth * self.config.indent));
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    fn blank(&mut self) {
        self.output.push('\n');
    }

    fn file(&mut self, module: &GeneratedModule) {
        if let Some(preamble) = &self.config.preamble {
            self.output.push_str(preamble.trim_end());
            self.output.push_str("\n\n");
        }
        self.output.push_str(&format!("import {}\n", self.config.import));

        for decl in module {
            self.blank();
            match decl {
                GeneratedDecl::Wrapper(wrapper) => self.wrapper(0, wrapper),
                GeneratedDecl::Tuple(tuple) => self.tuple(0, tuple),
            }
        }
    }

    fn wrapper(&mut self, depth: usize, wrapper: &WrapperDecl) {
        let original = wrapper.original.to_string();
        let stored = match wrapper.kind {
            DeclKind::Protocol => format!("any {original}"),
            DeclKind::Struct | DeclKind::Class => original.clone(),
        };

        self.class_header(depth, &wrapper.name, &stored);
        let inner = depth + 1;

        for init in &wrapper.initializers {
            match init {
                WrapperInit::Adopt => self.adoption_init(inner, &stored),
                WrapperInit::Forward { params, .. } => {
                    self.forwarding_init(inner, &original, params)
                }
            }
            self.blank();
        }

        for member in &wrapper.members {
            let receiver = if member.is_static {
                Receiver::Type(&original)
            } else {
                Receiver::Instance
            };
            self.member(inner, member, &receiver);
            self.blank();
        }

        for nested in &wrapper.nested {
            self.wrapper(inner, nested);
            self.blank();
        }

        self.line(depth, "}");
    }

    fn tuple(&mut self, depth: usize, tuple: &TupleWrapperDecl) {
        let stored = tuple.wrapped_type.to_string();
        self.class_header(depth, &tuple.name, &stored);
        let inner = depth + 1;

        self.adoption_init(inner, &stored);
        self.blank();

        for accessor in &tuple.accessors {
            self.tuple_accessor(inner, accessor);
            self.blank();
        }

        self.line(depth, "}");
    }

    fn class_header(&mut self, depth: usize, name: &str, stored: &str) {
        self.line(depth, &format!("@objc public class {name}: NSObject {{"));
        self.line(depth + 1, &format!("var wrappedInstance: {stored}"));
        self.blank();
    }

    fn adoption_init(&mut self, depth: usize, stored: &str) {
        self.line(depth, &format!("init(_ wrappedInstance: {stored}) {{"));
        self.line(depth + 1, "self.wrappedInstance = wrappedInstance");
        self.line(depth, "}");
    }

    fn forwarding_init(&mut self, depth: usize, original: &str, params: &[WrapperParam]) {
        // `init()` is inherited from NSObject.
        let modifier = if params.is_empty() { "override " } else { "" };
        self.line(
            depth,
            &format!("@objc public {modifier}init({}) {{", parameter_list(params)),
        );
        self.line(
            depth + 1,
            &format!("wrappedInstance = {original}({})", argument_list(params)),
        );
        self.line(depth, "}");
    }

    fn member(&mut self, depth: usize, member: &WrapperMember, receiver: &Receiver<'_>) {
        let attributes = if member.is_static {
            "@objc static public"
        } else {
            "@objc public"
        };
        let target = receiver.access(&member.name);

        match &member.kind {
            WrapperMemberKind::Property { ty, settable } => {
                let header = format!("{attributes} var {}: {}", member.name, ty.exposed());
                let setter = settable.then(|| format!("{target} = {}", unwrap(ty, "newValue")));
                self.property(depth, &header, &wrap(ty, &target), setter.as_deref());
            }
            WrapperMemberKind::Method { params, returns } => {
                let mut header = format!(
                    "{attributes} func {}({})",
                    member.name,
                    parameter_list(params)
                );
                if !returns.is_void() {
                    header.push_str(&format!(" -> {}", returns.exposed()));
                }
                self.line(depth, &format!("{header} {{"));

                let call = format!("{target}({})", argument_list(params));
                if returns.strategy() == Strategy::Simple {
                    self.line(depth + 1, &format!("return {call}"));
                } else {
                    self.line(depth + 1, &format!("let result = {call}"));
                    self.line(depth + 1, &format!("return {}", wrap(returns, "result")));
                }
                self.line(depth, "}");
            }
        }
    }

    fn tuple_accessor(&mut self, depth: usize, accessor: &TupleAccessor) {
        let header = format!("@objc public var {}: {}", accessor.name, accessor.ty.exposed());
        let target = format!("wrappedInstance.{}", accessor.element);
        let setter = format!("{target} = {}", unwrap(&accessor.ty, "newValue"));
        self.property(depth, &header, &wrap(&accessor.ty, &target), Some(&setter));
    }

    fn property(&mut self, depth: usize, header: &str, getter: &str, setter: Option<&str>) {
        self.line(depth, &format!("{header} {{"));
        self.line(depth + 1, "get {");
        self.line(depth + 2, getter);
        self.line(depth + 1, "}");
        if let Some(setter) = setter {
            self.line(depth + 1, "set {");
            self.line(depth + 2, setter);
            self.line(depth + 1, "}");
        }
        self.line(depth, "}");
    }
}

/// Expression converting the raw `expr` to its exposed form.
fn wrap(ty: &WrappedType, expr: &str) -> String {
    match ty {
        WrappedType::Void | WrappedType::Primitive { .. } => expr.to_string(),
        WrappedType::Wrapper { wrapper, .. } => format!("{wrapper}({expr})"),
        WrappedType::Tuple { wrapper, .. } => format!("{wrapper}({expr})"),
        WrappedType::Optional { inner } => match inner.strategy() {
            Strategy::Simple => expr.to_string(),
            Strategy::TupleWrapped | Strategy::WrapperWrapped => {
                format!("{expr}.map {{ {} }}", wrap(inner, "$0"))
            }
        },
    }
}

/// Expression converting the exposed `expr` back to the raw value.
fn unwrap(ty: &WrappedType, expr: &str) -> String {
    match ty {
        WrappedType::Void | WrappedType::Primitive { .. } => expr.to_string(),
        WrappedType::Wrapper { .. } | WrappedType::Tuple { .. } => {
            format!("{expr}.wrappedInstance")
        }
        WrappedType::Optional { inner } => match inner.strategy() {
            Strategy::Simple => expr.to_string(),
            Strategy::TupleWrapped | Strategy::WrapperWrapped => {
                format!("{expr}?.wrappedInstance")
            }
        },
    }
}

/// `x: Int, y: PointWrapper`.
fn parameter_list(params: &[WrapperParam]) -> String {
    params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.ty.exposed()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `x: x, y: y.wrappedInstance`.
fn argument_list(params: &[WrapperParam]) -> String {
    params
        .iter()
        .map(|p| format!("{}: {}", p.name, unwrap(&p.ty, &p.name)))
        .collect::<Vec<_>>()
        .join(", ")
}
