use crate::InvalidArgument;

/// An on-air address of 3 to 5 bytes.
///
/// Addresses are given most significant byte first, which is how they are
/// usually written down. The radio stores them least significant byte first,
/// so the bytes are reversed on the way in and on the way out.
///
/// ```
/// use nrf24::radio::Address;
///
/// let address = Address::from_msb_first(&[0xAA, 0xBB, 0xCC]).unwrap();
/// assert_eq!(address.as_register_bytes(), &[0xCC, 0xBB, 0xAA]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Address {
    /// Register order (LSB first). Only `len` bytes are meaningful.
    bytes: [u8; Address::MAX_LEN],
    len: usize,
}

impl Address {
    /// The shortest address the radio supports.
    pub const MIN_LEN: usize = 3;
    /// The longest address the radio supports.
    pub const MAX_LEN: usize = 5;

    /// Create an [`Address`] from bytes given most significant byte first.
    pub fn from_msb_first(address: &[u8]) -> Result<Self, InvalidArgument> {
        let len = Self::check_len(address.len())?;
        let mut bytes = [0u8; Self::MAX_LEN];
        for (dst, src) in bytes[..len].iter_mut().zip(address.iter().rev()) {
            *dst = *src;
        }
        Ok(Self { bytes, len })
    }

    /// Create an [`Address`] from a register image (least significant byte first).
    pub fn from_register_bytes(image: &[u8]) -> Result<Self, InvalidArgument> {
        let len = Self::check_len(image.len())?;
        let mut bytes = [0u8; Self::MAX_LEN];
        bytes[..len].copy_from_slice(image);
        Ok(Self { bytes, len })
    }

    /// Ensure `len` is a supported address length.
    pub(crate) fn check_len(len: usize) -> Result<usize, InvalidArgument> {
        if (Self::MIN_LEN..=Self::MAX_LEN).contains(&len) {
            Ok(len)
        } else {
            Err(InvalidArgument::AddressLength(len))
        }
    }

    /// The number of bytes in this address.
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// The bytes as they are written to an address register.
    pub fn as_register_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Copy the bytes (most significant byte first) into `buf`.
    ///
    /// Returns how many bytes were copied, which is limited by `buf.len()`.
    pub fn copy_msb_first(&self, buf: &mut [u8]) -> usize {
        let len = buf.len().min(self.len);
        for (dst, src) in buf[..len].iter_mut().zip(self.as_register_bytes().iter().rev()) {
            *dst = *src;
        }
        len
    }

    /// The least significant byte.
    pub const fn lsb(&self) -> u8 {
        self.bytes[0]
    }

    /// The most significant byte: the first byte the caller supplied.
    pub const fn msb(&self) -> u8 {
        self.bytes[self.len - 1]
    }
}

/// The address held by pipe 1, whose upper bytes pipes 2 - 5 borrow.
///
/// Pipes 2 - 5 only have a single byte of their own. Any change made on their
/// behalf to the shared bytes goes through this type so that pipe 1's register
/// is always rewritten as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SharedBase {
    image: Address,
}

impl SharedBase {
    /// Wrap the register image just read from RX_ADDR_P1.
    pub fn from_register(image: &[u8]) -> Result<Self, InvalidArgument> {
        Ok(Self {
            image: Address::from_register_bytes(image)?,
        })
    }

    /// Replace the least significant byte of pipe 1's address.
    pub fn with_lsb(self, lsb: u8) -> Self {
        let mut image = self.image;
        image.bytes[0] = lsb;
        Self { image }
    }

    /// The register image to write back to RX_ADDR_P1.
    pub fn as_register_bytes(&self) -> &[u8] {
        self.image.as_register_bytes()
    }

    /// The full address of a pipe (2 - 5) whose own register holds `pipe_byte`.
    pub fn compose(&self, pipe_byte: u8) -> Address {
        let mut address = self.image;
        address.bytes[0] = pipe_byte;
        address
    }
}
