//
// Copyright (c) The sysrepo-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Data trees retrieved from sysrepo.

use bitflags::bitflags;
use std::ffi::CString;
use std::marker::PhantomData;
use std::os::raw::{c_char, c_void};

use crate::connection::Connection;
use crate::error::{Error, ErrorCode, Result};
use crate::iter::{Ancestors, NodeIterable, Siblings, Traverse};
use crate::utils::*;
use libyang3_sys as ly;
use sysrepo_sys as ffi;

/// Data tree returned by [`Session::get_data`].
///
/// The tree is owned by the caller and released when dropped. While it
/// exists, sysrepo keeps the libyang context of the connection locked for
/// reading, so it shouldn't be kept around longer than needed.
///
/// [`Session::get_data`]: crate::session::Session::get_data
#[derive(Debug)]
pub struct DataTree<'a> {
    raw: *mut ffi::sr_data_t,
    _marker: PhantomData<&'a Connection>,
}

/// Reference to a node of a [`DataTree`].
#[derive(Clone, Debug)]
pub struct DataNodeRef<'a, 'b> {
    tree: &'a DataTree<'b>,
    raw: *mut ly::lyd_node,
}

/// Data output formats supported by libyang.
#[allow(clippy::upper_case_acronyms)]
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataFormat {
    /// XML instance data format.
    XML = ly::LYD_FORMAT::LYD_XML,
    /// JSON instance data format.
    JSON = ly::LYD_FORMAT::LYD_JSON,
}

bitflags! {
    /// Data printer flags.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct DataPrinterFlags: u32 {
        /// Flag for printing also the (following) sibling nodes of the data
        /// node.
        const WITH_SIBLINGS = ly::LYD_PRINT_WITHSIBLINGS;
        /// Flag for output without indentation and formatting new lines.
        const SHRINK = ly::LYD_PRINT_SHRINK;
        /// Preserve empty non-presence containers.
        const KEEP_EMPTY_CONT = ly::LYD_PRINT_KEEPEMPTYCONT;
        /// Include implicit default nodes.
        const WD_ALL = ly::LYD_PRINT_WD_ALL;
    }
}

// ===== impl DataTree =====

impl<'a> DataTree<'a> {
    /// Take ownership of data returned by sysrepo.
    ///
    /// # Safety
    ///
    /// `raw` must be either NULL or data returned by `sr_get_data()` that
    /// wasn't released yet.
    pub(crate) unsafe fn from_raw(raw: *mut ffi::sr_data_t) -> DataTree<'a> {
        DataTree {
            raw,
            _marker: PhantomData,
        }
    }

    fn root(&self) -> *mut ly::lyd_node {
        if self.raw.is_null() {
            std::ptr::null_mut()
        } else {
            unsafe { (*self.raw).tree }
        }
    }

    /// Whether the retrieved data is empty.
    pub fn is_empty(&self) -> bool {
        self.root().is_null()
    }

    /// Returns a reference to the fist top-level data node, unless the data
    /// tree is empty.
    pub fn reference<'b>(&'b self) -> Option<DataNodeRef<'b, 'a>> {
        unsafe { DataNodeRef::from_raw_opt(self, self.root()) }
    }

    /// Returns an iterator over all elements in the data tree and its sibling
    /// trees (depth-first search algorithm).
    pub fn traverse<'b>(&'b self) -> impl Iterator<Item = DataNodeRef<'b, 'a>> {
        let top = Siblings::new(self.reference());
        top.flat_map(|dnode| dnode.traverse())
    }

    /// Search in the data tree for a single node matching the provided path.
    ///
    /// Returns `None` when no such node exists.
    pub fn find_path<'b>(&'b self, path: &str) -> Option<DataNodeRef<'b, 'a>> {
        if self.is_empty() {
            return None;
        }

        let path = CString::new(path).ok()?;
        let mut rnode = std::ptr::null_mut();
        let ret = unsafe {
            ly::lyd_find_path(self.root(), path.as_ptr(), 0u8, &mut rnode)
        };
        if ret != ly::LY_ERR::LY_SUCCESS {
            return None;
        }

        unsafe { DataNodeRef::from_raw_opt(self, rnode) }
    }

    /// Print the data tree (with all its top-level siblings) in the specified
    /// format to a `String`.
    ///
    /// An empty tree prints as an empty string.
    pub fn print_string(
        &self,
        format: DataFormat,
        options: DataPrinterFlags,
    ) -> Result<String> {
        let options = options | DataPrinterFlags::WITH_SIBLINGS;
        print_node(self.root(), format, options)
    }
}

impl Drop for DataTree<'_> {
    fn drop(&mut self) {
        if !self.raw.is_null() {
            unsafe { ffi::sr_release_data(self.raw) };
            self.raw = std::ptr::null_mut();
        }
    }
}

// ===== impl DataNodeRef =====

impl<'a, 'b> DataNodeRef<'a, 'b> {
    /// Node name.
    pub fn name(&self) -> &str {
        let snode = unsafe { (*self.raw).schema };
        if snode.is_null() {
            let ropaq = self.raw as *mut ly::lyd_node_opaq;
            return char_ptr_to_str(unsafe { (*ropaq).name.name });
        }
        char_ptr_to_str(unsafe { (*snode).name })
    }

    /// Generate path of the node.
    pub fn path(&self) -> String {
        node_path(self.raw)
    }

    /// Node's value (canonical string representation).
    ///
    /// Only leaves and leaf-lists have a value.
    pub fn value_canonical(&self) -> Option<String> {
        node_value_canonical(self.raw)
    }

    /// Returns the parent node, unless this is a top-level node.
    pub fn parent(&self) -> Option<DataNodeRef<'a, 'b>> {
        NodeIterable::parent(self)
    }

    /// Returns an iterator over the ancestor data nodes.
    pub fn ancestors(&self) -> Ancestors<'a, DataNodeRef<'a, 'b>> {
        Ancestors::new(self.parent())
    }

    /// Returns an iterator over the sibling data nodes.
    pub fn siblings(&self) -> Siblings<'a, DataNodeRef<'a, 'b>> {
        Siblings::new(self.next_sibling())
    }

    /// Returns an iterator over this data node and its siblings.
    pub fn inclusive_siblings(&self) -> Siblings<'a, DataNodeRef<'a, 'b>> {
        Siblings::new(Some(self.clone()))
    }

    /// Returns an iterator over the child data nodes.
    pub fn children(&self) -> Siblings<'a, DataNodeRef<'a, 'b>> {
        Siblings::new(self.first_child())
    }

    /// Returns an iterator over all elements in the subtree (depth-first
    /// search algorithm).
    pub fn traverse(&self) -> Traverse<'a, DataNodeRef<'a, 'b>> {
        Traverse::new(self.clone())
    }

    /// Print the subtree rooted at this node to a `String`.
    pub fn print_string(
        &self,
        format: DataFormat,
        options: DataPrinterFlags,
    ) -> Result<String> {
        print_node(self.raw, format, options)
    }
}

unsafe impl<'a, 'b> Binding<'a> for DataNodeRef<'a, 'b> {
    type CType = ly::lyd_node;
    type Container = DataTree<'b>;

    unsafe fn from_raw(
        tree: &'a DataTree<'b>,
        raw: *mut ly::lyd_node,
    ) -> DataNodeRef<'a, 'b> {
        DataNodeRef { tree, raw }
    }
}

impl<'a, 'b> NodeIterable<'a> for DataNodeRef<'a, 'b> {
    fn parent(&self) -> Option<DataNodeRef<'a, 'b>> {
        // NOTE: can't use lyd_parent() since it's an inline function.
        let rparent = unsafe { (*self.raw).parent };
        if rparent.is_null() {
            return None;
        }
        let rparent = unsafe { &mut (*rparent).__bindgen_anon_1.node };
        unsafe { DataNodeRef::from_raw_opt(self.tree, rparent) }
    }

    fn next_sibling(&self) -> Option<DataNodeRef<'a, 'b>> {
        let rsibling = unsafe { (*self.raw).next };
        unsafe { DataNodeRef::from_raw_opt(self.tree, rsibling) }
    }

    fn first_child(&self) -> Option<DataNodeRef<'a, 'b>> {
        // NOTE: can't use lyd_child() since it's an inline function.
        let snode = unsafe { (*self.raw).schema };
        if snode.is_null() {
            let ropaq = self.raw as *mut ly::lyd_node_opaq;
            let rchild = unsafe { (*ropaq).child };
            return unsafe { DataNodeRef::from_raw_opt(self.tree, rchild) };
        }

        let nodetype = unsafe { (*snode).nodetype as u32 };
        let rchild = match nodetype {
            ly::LYS_CONTAINER
            | ly::LYS_LIST
            | ly::LYS_RPC
            | ly::LYS_ACTION
            | ly::LYS_NOTIF => {
                let rinner = self.raw as *mut ly::lyd_node_inner;
                unsafe { (*rinner).child }
            }
            _ => std::ptr::null_mut(),
        };
        unsafe { DataNodeRef::from_raw_opt(self.tree, rchild) }
    }
}

impl PartialEq for DataNodeRef<'_, '_> {
    fn eq(&self, other: &DataNodeRef<'_, '_>) -> bool {
        self.raw == other.raw
    }
}

// ===== helper functions =====

fn print_node(
    raw: *const ly::lyd_node,
    format: DataFormat,
    options: DataPrinterFlags,
) -> Result<String> {
    if raw.is_null() {
        return Ok(String::new());
    }

    let mut cstr = std::ptr::null_mut();
    let ret = unsafe {
        ly::lyd_print_mem(&mut cstr, raw, format as u32, options.bits())
    };
    if ret != ly::LY_ERR::LY_SUCCESS {
        return Err(Error::new(
            ErrorCode::Libyang,
            format!("Couldn't print data tree (libyang error {})", ret),
        ));
    }
    if cstr.is_null() {
        return Ok(String::new());
    }

    let output = char_ptr_to_string(cstr);
    unsafe { libc::free(cstr as *mut c_void) };
    Ok(output)
}

/// Data path of a node.
pub(crate) fn node_path(raw: *const ly::lyd_node) -> String {
    let pathtype = ly::LYD_PATH_TYPE::LYD_PATH_STD;
    let path = unsafe { ly::lyd_path(raw, pathtype, std::ptr::null_mut(), 0) };
    if path.is_null() {
        return String::new();
    }

    let output = char_ptr_to_string(path);
    unsafe { libc::free(path as *mut c_void) };
    output
}

/// Canonical value of a leaf or leaf-list node.
pub(crate) fn node_value_canonical(raw: *const ly::lyd_node) -> Option<String> {
    let snode = unsafe { (*raw).schema };
    if snode.is_null() {
        return None;
    }

    let nodetype = unsafe { (*snode).nodetype as u32 };
    if nodetype & (ly::LYS_LEAF | ly::LYS_LEAFLIST) == 0 {
        return None;
    }

    let rnode = raw as *const ly::lyd_node_term;
    let mut value: *const c_char = unsafe { (*rnode).value._canonical };
    if value.is_null() {
        let ctx = unsafe { (*(*snode).module).ctx };
        value = unsafe { ly::lyd_value_get_canonical(ctx, &(*rnode).value) };
    }
    char_ptr_to_opt_string(value)
}
