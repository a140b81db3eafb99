//! C-ABI surface: one-shot hashing, the streaming context, the version
//! string, and the legacy `vortex_hash` alias.
//!
//! Every function here does its own pointer/length validation and then
//! delegates to the safe Rust API in [`crate::qvortex`]; none of the
//! algorithm itself lives in this module. Status codes: `0` on success,
//! `-1` for a null pointer or otherwise invalid argument, `-2` (defined,
//! never returned) for an allocation failure that cannot occur on this
//! crate's allocation-free hot path.
use std::ffi::c_char;
use std::ptr;

use crate::error::{status, QvortexError};
use crate::qvortex::{hash_once, Context, DIGEST_LEN};

/// Build a `&[u8]` from a raw `(ptr, len)` pair.
///
/// A null `ptr` paired with `len == 0` is the documented no-op case; a
/// null `ptr` with a non-zero `len` is rejected as [`QvortexError::NullPointer`].
///
/// # Safety
/// `ptr` must be valid for reads of `len` bytes when non-null, as required
/// of every raw-pointer argument crossing this crate's C-ABI boundary.
unsafe fn slice_from_raw<'a>(
    ptr: *const u8,
    len: usize,
) -> Result<&'a [u8], QvortexError> {
    if ptr.is_null() {
        return if len == 0 {
            Ok(&[])
        } else {
            Err(QvortexError::NullPointer)
        };
    }
    // SAFETY: caller upholds the validity contract documented above.
    Ok(unsafe { std::slice::from_raw_parts(ptr, len) })
}

/// One-shot hash: `qvortex_hash(data, len, _reserved1, _reserved2, key, key_len, out)`.
///
/// `_reserved1` and `_reserved2` are unused and retained only for legacy
/// binary compatibility; any value is accepted.
///
/// # Safety
/// `data` must be valid for reads of `len` bytes (or null with `len == 0`);
/// `key` must be valid for reads of `key_len` bytes (or null with
/// `key_len == 0`); `out` must be valid for writes of 32 bytes and non-null.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qvortex_hash(
    data: *const u8,
    len: usize,
    _reserved1: u64,
    _reserved2: u64,
    key: *const u8,
    key_len: usize,
    out: *mut u8,
) -> i32 {
    // SAFETY: pointer/length contracts are forwarded from this function's
    // own documented `unsafe` contract.
    let result = (|| -> Result<(), QvortexError> {
        let data = unsafe { slice_from_raw(data, len) }?;
        let key = unsafe { slice_from_raw(key, key_len) }?;
        if out.is_null() {
            return Err(QvortexError::NullPointer);
        }
        let digest = hash_once(data, key);
        // SAFETY: `out` was checked non-null above and must, by this
        // function's contract, be valid for writes of `DIGEST_LEN` bytes.
        unsafe { ptr::copy_nonoverlapping(digest.as_ptr(), out, DIGEST_LEN) };
        Ok(())
    })();

    match result {
        Ok(()) => status::SUCCESS,
        Err(e) => e.to_status(),
    }
}

/// Legacy alias for [`qvortex_hash`] with identical semantics.
///
/// # Safety
/// Same contract as [`qvortex_hash`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vortex_hash(
    data: *const u8,
    len: usize,
    reserved1: u64,
    reserved2: u64,
    key: *const u8,
    key_len: usize,
    out: *mut u8,
) -> i32 {
    // SAFETY: forwards this function's own contract unchanged.
    unsafe { qvortex_hash(data, len, reserved1, reserved2, key, key_len, out) }
}

/// `qvortex_init(ctx, key, key_len)`.
///
/// `_blocks_per_sbox` and `_use_precomputed` exist only for legacy shape:
/// they are not inputs to the algorithm and are accepted and ignored so
/// that legacy callers built against the wider signature still link.
///
/// # Safety
/// `ctx` must be valid for writes of `size_of::<Context>()` bytes and
/// non-null (its prior contents, if any, are overwritten, not read). `key`
/// must be valid for reads of `key_len` bytes, or null with `key_len == 0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qvortex_init(
    ctx: *mut Context,
    key: *const u8,
    key_len: usize,
    _blocks_per_sbox: u64,
    _use_precomputed: i32,
) -> i32 {
    if ctx.is_null() {
        return status::NULL_POINTER;
    }
    // SAFETY: `key`/`key_len` contract forwarded from this function's own.
    let key = match unsafe { slice_from_raw(key, key_len) } {
        Ok(key) => key,
        Err(e) => return e.to_status(),
    };
    let fresh = Context::new(key);
    // SAFETY: `ctx` was checked non-null and is valid for writes per this
    // function's contract; we only ever write a freshly constructed value,
    // never read the (possibly uninitialized) memory it points to.
    unsafe { ptr::write(ctx, fresh) };
    status::SUCCESS
}

/// `qvortex_update(ctx, data, len)`.
///
/// # Safety
/// `ctx` must be non-null and point to a context previously initialized by
/// [`qvortex_init`] and not yet consumed by [`qvortex_final`]. `data` must
/// be valid for reads of `len` bytes, or null with `len == 0`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qvortex_update(ctx: *mut Context, data: *const u8, len: usize) -> i32 {
    if ctx.is_null() {
        return status::NULL_POINTER;
    }
    // SAFETY: `data`/`len` contract forwarded from this function's own.
    let data = match unsafe { slice_from_raw(data, len) } {
        Ok(data) => data,
        Err(e) => return e.to_status(),
    };
    // SAFETY: `ctx` was checked non-null and, per this function's contract,
    // points at a live, initialized `Context`.
    unsafe { (*ctx).update(data) };
    status::SUCCESS
}

/// `qvortex_final(ctx, out)`.
///
/// Emits the 32-byte digest and zeroes the entire context in place,
/// including the caller's own backing memory, not just a local copy.
///
/// # Safety
/// `ctx` must be non-null and point to a context previously initialized by
/// [`qvortex_init`]. `out` must be valid for writes of 32 bytes and
/// non-null. After this call returns successfully, `ctx` must be
/// re-initialized via [`qvortex_init`] before further use.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qvortex_final(ctx: *mut Context, out: *mut u8) -> i32 {
    if ctx.is_null() || out.is_null() {
        return status::NULL_POINTER;
    }
    // SAFETY: `ctx` was checked non-null and, per this function's contract,
    // points at a live, initialized `Context`; moving it out leaves the
    // backing memory logically uninitialized until we zero it below.
    let owned = unsafe { ptr::read(ctx) };
    let digest = owned.finalize();
    // SAFETY: `ctx` points to `size_of::<Context>()` valid bytes that we
    // just logically took ownership of; zeroing them is exactly the state
    // transition this function's contract documents.
    unsafe { ptr::write_bytes(ctx as *mut u8, 0, std::mem::size_of::<Context>()) };
    // SAFETY: `out` was checked non-null and must, by this function's
    // contract, be valid for writes of `DIGEST_LEN` bytes.
    unsafe { ptr::copy_nonoverlapping(digest.as_ptr(), out, DIGEST_LEN) };
    status::SUCCESS
}

static VERSION_CSTR: &[u8] = b"1.0.0\0";

/// `qvortex_version() -> string`, returning `"1.0.0"`. The returned
/// pointer is `'static` and never null.
#[unsafe(no_mangle)]
pub extern "C" fn qvortex_version() -> *const c_char {
    VERSION_CSTR.as_ptr().cast()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn version_round_trips_through_c_string() {
        let ptr = qvortex_version();
        let s = unsafe { CStr::from_ptr(ptr) }.to_str().unwrap();
        assert_eq!(s, crate::VERSION);
    }

    #[test]
    fn hash_rejects_null_out_pointer() {
        let data = b"abc";
        let status = unsafe {
            qvortex_hash(
                data.as_ptr(),
                data.len(),
                0,
                0,
                ptr::null(),
                0,
                ptr::null_mut(),
            )
        };
        assert_eq!(status, status::NULL_POINTER);
    }

    #[test]
    fn hash_rejects_null_data_with_nonzero_len() {
        let mut out = [0u8; DIGEST_LEN];
        let status =
            unsafe { qvortex_hash(ptr::null(), 5, 0, 0, ptr::null(), 0, out.as_mut_ptr()) };
        assert_eq!(status, status::NULL_POINTER);
    }

    #[test]
    fn hash_accepts_null_data_with_zero_len() {
        let mut out = [0u8; DIGEST_LEN];
        let status =
            unsafe { qvortex_hash(ptr::null(), 0, 0, 0, ptr::null(), 0, out.as_mut_ptr()) };
        assert_eq!(status, status::SUCCESS);
        assert_eq!(out, crate::hash(b"", b""));
    }

    #[test]
    fn reserved_parameters_are_ignored() {
        let data = b"reserved params";
        let mut out_a = [0u8; DIGEST_LEN];
        let mut out_b = [0u8; DIGEST_LEN];
        unsafe {
            qvortex_hash(
                data.as_ptr(),
                data.len(),
                0,
                0,
                ptr::null(),
                0,
                out_a.as_mut_ptr(),
            );
            qvortex_hash(
                data.as_ptr(),
                data.len(),
                0xDEAD_BEEF,
                0xFEED_FACE,
                ptr::null(),
                0,
                out_b.as_mut_ptr(),
            );
        }
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn vortex_hash_matches_qvortex_hash() {
        let data = b"legacy alias";
        let mut out_a = [0u8; DIGEST_LEN];
        let mut out_b = [0u8; DIGEST_LEN];
        unsafe {
            qvortex_hash(
                data.as_ptr(),
                data.len(),
                0,
                0,
                ptr::null(),
                0,
                out_a.as_mut_ptr(),
            );
            vortex_hash(
                data.as_ptr(),
                data.len(),
                0,
                0,
                ptr::null(),
                0,
                out_b.as_mut_ptr(),
            );
        }
        assert_eq!(out_a, out_b);
    }

    #[test]
    fn streaming_ffi_matches_one_shot_ffi() {
        let data = b"streaming over the c abi boundary, past one block";
        let mut one_shot = [0u8; DIGEST_LEN];
        unsafe {
            qvortex_hash(
                data.as_ptr(),
                data.len(),
                0,
                0,
                ptr::null(),
                0,
                one_shot.as_mut_ptr(),
            )
        };

        let mut ctx = std::mem::MaybeUninit::<Context>::uninit();
        let mut streamed = [0u8; DIGEST_LEN];
        unsafe {
            assert_eq!(
                qvortex_init(ctx.as_mut_ptr(), ptr::null(), 0, 0, 0),
                status::SUCCESS
            );
            assert_eq!(
                qvortex_update(ctx.as_mut_ptr(), data.as_ptr(), 7),
                status::SUCCESS
            );
            assert_eq!(
                qvortex_update(ctx.as_mut_ptr(), data[7..].as_ptr(), data.len() - 7),
                status::SUCCESS
            );
            assert_eq!(
                qvortex_final(ctx.as_mut_ptr(), streamed.as_mut_ptr()),
                status::SUCCESS
            );
        }
        assert_eq!(streamed, one_shot);
    }

    #[test]
    fn init_rejects_null_ctx() {
        let status = unsafe { qvortex_init(ptr::null_mut(), ptr::null(), 0, 0, 0) };
        assert_eq!(status, status::NULL_POINTER);
    }

    #[test]
    fn update_rejects_null_ctx() {
        let status = unsafe { qvortex_update(ptr::null_mut(), ptr::null(), 0) };
        assert_eq!(status, status::NULL_POINTER);
    }

    #[test]
    fn final_rejects_null_ctx_or_out() {
        let mut ctx = std::mem::MaybeUninit::<Context>::uninit();
        unsafe {
            qvortex_init(ctx.as_mut_ptr(), ptr::null(), 0, 0, 0);
        }
        let mut out = [0u8; DIGEST_LEN];
        assert_eq!(
            unsafe { qvortex_final(ptr::null_mut(), out.as_mut_ptr()) },
            status::NULL_POINTER
        );
        assert_eq!(
            unsafe { qvortex_final(ctx.as_mut_ptr(), ptr::null_mut()) },
            status::NULL_POINTER
        );
    }
}
