use bytes::Bytes;

/// Encoded exactly like the raw bytes it returns.
pub trait ByteSerializable {
    fn to_bytes(&self) -> Bytes;
}

impl ByteSerializable for Bytes {
    fn to_bytes(&self) -> Bytes {
        self.clone()
    }
}

impl ByteSerializable for Vec<u8> {
    fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self)
    }
}

impl ByteSerializable for [u8] {
    fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self)
    }
}

impl<const N: usize> ByteSerializable for [u8; N] {
    fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(self)
    }
}

impl<T: ByteSerializable + ?Sized> ByteSerializable for &T {
    fn to_bytes(&self) -> Bytes {
        (**self).to_bytes()
    }
}
