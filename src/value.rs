//
// Copyright (c) The sysrepo-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Typed values of data nodes.

use crate::utils::*;
use sysrepo_sys as ffi;

/// Value of a data node retrieved from sysrepo.
///
/// All the string-based types hold the canonical string representation used
/// by sysrepo.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A list instance.
    List,
    /// A non-presence container.
    Container,
    /// A presence container.
    ContainerPresence,
    /// A leaf of type empty.
    LeafEmpty,
    /// A notification instance.
    Notification,
    /// Base64-encoded binary data.
    Binary(String),
    /// A set of bits, separated by spaces.
    Bits(String),
    Bool(bool),
    Decimal64(f64),
    /// Enumeration name.
    Enum(String),
    /// Identity name, prefixed by its module name.
    IdentityRef(String),
    /// Instance identifier path.
    InstanceId(String),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    String(String),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    /// Serialized anyxml content.
    AnyXml(Option<String>),
    /// Serialized anydata content.
    AnyData(Option<String>),
    /// A value of a type unknown to these bindings.
    Unknown,
}

impl Value {
    /// Copy the value out of a sysrepo value structure.
    ///
    /// # Safety
    ///
    /// `raw` must point to a valid `sr_val_t`.
    pub(crate) unsafe fn from_raw(raw: *const ffi::sr_val_t) -> Value {
        let raw = &*raw;
        let data = &raw.data;
        let string = |ptr: *mut std::os::raw::c_char| {
            char_ptr_to_opt_string(ptr).unwrap_or_default()
        };

        match raw.type_ {
            ffi::sr_val_type_t::SR_LIST_T => Value::List,
            ffi::sr_val_type_t::SR_CONTAINER_T => Value::Container,
            ffi::sr_val_type_t::SR_CONTAINER_PRESENCE_T => {
                Value::ContainerPresence
            }
            ffi::sr_val_type_t::SR_LEAF_EMPTY_T => Value::LeafEmpty,
            ffi::sr_val_type_t::SR_NOTIFICATION_T => Value::Notification,
            ffi::sr_val_type_t::SR_BINARY_T => {
                Value::Binary(string(data.binary_val))
            }
            ffi::sr_val_type_t::SR_BITS_T => Value::Bits(string(data.bits_val)),
            ffi::sr_val_type_t::SR_BOOL_T => Value::Bool(data.bool_val),
            ffi::sr_val_type_t::SR_DECIMAL64_T => {
                Value::Decimal64(data.decimal64_val)
            }
            ffi::sr_val_type_t::SR_ENUM_T => Value::Enum(string(data.enum_val)),
            ffi::sr_val_type_t::SR_IDENTITYREF_T => {
                Value::IdentityRef(string(data.identityref_val))
            }
            ffi::sr_val_type_t::SR_INSTANCEID_T => {
                Value::InstanceId(string(data.instanceid_val))
            }
            ffi::sr_val_type_t::SR_INT8_T => Value::Int8(data.int8_val),
            ffi::sr_val_type_t::SR_INT16_T => Value::Int16(data.int16_val),
            ffi::sr_val_type_t::SR_INT32_T => Value::Int32(data.int32_val),
            ffi::sr_val_type_t::SR_INT64_T => Value::Int64(data.int64_val),
            ffi::sr_val_type_t::SR_STRING_T => {
                Value::String(string(data.string_val))
            }
            ffi::sr_val_type_t::SR_UINT8_T => Value::Uint8(data.uint8_val),
            ffi::sr_val_type_t::SR_UINT16_T => Value::Uint16(data.uint16_val),
            ffi::sr_val_type_t::SR_UINT32_T => Value::Uint32(data.uint32_val),
            ffi::sr_val_type_t::SR_UINT64_T => Value::Uint64(data.uint64_val),
            ffi::sr_val_type_t::SR_ANYXML_T => {
                Value::AnyXml(char_ptr_to_opt_string(data.anyxml_val))
            }
            ffi::sr_val_type_t::SR_ANYDATA_T => {
                Value::AnyData(char_ptr_to_opt_string(data.anydata_val))
            }
            _ => Value::Unknown,
        }
    }

    /// Whether the value belongs to a leaf or leaf-list holding data.
    pub fn is_terminal(&self) -> bool {
        !matches!(
            self,
            Value::List
                | Value::Container
                | Value::ContainerPresence
                | Value::LeafEmpty
                | Value::Notification
                | Value::Unknown
        )
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::List
            | Value::Container
            | Value::ContainerPresence
            | Value::LeafEmpty
            | Value::Notification
            | Value::Unknown => Ok(()),
            Value::Binary(value)
            | Value::Bits(value)
            | Value::Enum(value)
            | Value::IdentityRef(value)
            | Value::InstanceId(value)
            | Value::String(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            // Keep at least one fractional digit, as in the canonical YANG
            // representation.
            Value::Decimal64(value) if value.fract() == 0.0 => {
                write!(f, "{:.1}", value)
            }
            Value::Decimal64(value) => write!(f, "{}", value),
            Value::Int8(value) => write!(f, "{}", value),
            Value::Int16(value) => write!(f, "{}", value),
            Value::Int32(value) => write!(f, "{}", value),
            Value::Int64(value) => write!(f, "{}", value),
            Value::Uint8(value) => write!(f, "{}", value),
            Value::Uint16(value) => write!(f, "{}", value),
            Value::Uint32(value) => write!(f, "{}", value),
            Value::Uint64(value) => write!(f, "{}", value),
            Value::AnyXml(value) | Value::AnyData(value) => {
                write!(f, "{}", value.as_deref().unwrap_or_default())
            }
        }
    }
}
