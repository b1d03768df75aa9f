//! Little-endian field encoding.
//!
//! Every value Argon2 feeds into BLAKE2b is a concatenation of typed fields:
//! 32-bit parameters, length-prefixed byte strings and whole memory blocks.
//! [`LeStream`] records those fields in call order and serializes each one
//! least-significant byte first, independent of the host byte order.
//!
//! The stream borrows its inputs and never materializes the concatenation.
//! Consumers pull it chunk by chunk through [`LeStream::for_each_chunk`],
//! so a 1024-byte block is serialized one word at a time.

/// One recorded field of a [`LeStream`].
#[derive(Debug, Clone, Copy)]
enum Field<'a> {
    U16(u16),
    U32(u32),
    Bytes(&'a [u8]),
    Words(&'a [u64]),
}

impl Field<'_> {
    fn len(&self) -> usize {
        match self {
            Field::U16(_) => 2,
            Field::U32(_) => 4,
            Field::Bytes(bytes) => bytes.len(),
            Field::Words(words) => words.len() * 8,
        }
    }
}

/// Append-only builder of a little-endian byte stream.
#[derive(Debug, Clone, Default)]
pub struct LeStream<'a> {
    fields: Vec<Field<'a>>,
}

impl<'a> LeStream<'a> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn push_u16(&mut self, value: u16) -> &mut Self {
        self.fields.push(Field::U16(value));
        self
    }

    pub fn push_u32(&mut self, value: u32) -> &mut Self {
        self.fields.push(Field::U32(value));
        self
    }

    /// Appends raw bytes with no length prefix.
    pub fn push_bytes(&mut self, bytes: &'a [u8]) -> &mut Self {
        if !bytes.is_empty() {
            self.fields.push(Field::Bytes(bytes));
        }
        self
    }

    /// Appends a 32-bit length followed by the bytes.
    ///
    /// An absent field and an empty one both encode as a zero length.
    /// The caller guarantees the length fits in 32 bits.
    pub fn push_prefixed(&mut self, bytes: Option<&'a [u8]>) -> &mut Self {
        let bytes = bytes.unwrap_or(&[]);
        self.push_u32(bytes.len() as u32);
        self.push_bytes(bytes)
    }

    /// Appends 64-bit words, e.g. the contents of a memory block.
    pub fn push_words(&mut self, words: &'a [u64]) -> &mut Self {
        if !words.is_empty() {
            self.fields.push(Field::Words(words));
        }
        self
    }

    /// Total encoded length in bytes.
    pub fn len(&self) -> usize {
        self.fields.iter().map(Field::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Feeds the encoded stream to `sink` in order, one field (or one word)
    /// at a time.
    pub fn for_each_chunk<F: FnMut(&[u8])>(&self, mut sink: F) {
        for field in &self.fields {
            match *field {
                Field::U16(v) => sink(&v.to_le_bytes()),
                Field::U32(v) => sink(&v.to_le_bytes()),
                Field::Bytes(bytes) => sink(bytes),
                Field::Words(words) => {
                    for word in words {
                        sink(&word.to_le_bytes());
                    }
                }
            }
        }
    }

    /// Collects the full encoding. Mostly useful for inspection.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        self.for_each_chunk(|chunk| out.extend_from_slice(chunk));
        out
    }
}
