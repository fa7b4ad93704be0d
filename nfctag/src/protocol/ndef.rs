// nfctag/src/protocol/ndef.rs
//! NDEF records, messages and the Type 2 TLV container.
//!
//! Record layout (NFC Forum NDEF 1.0):
//!
//! ```text
//! [MB ME CF SR IL TNF(3)] [type len] [payload len: 1 (SR) or 4 BE] [id len if IL]
//! [type] [id] [payload]
//! ```
//!
//! Text record payload: `[status][lang code][text]`, where the low 6 bits of
//! the status byte are the language code length and bit 7 selects UTF-16.

use crate::constants::{
    RTD_TEXT, TEXT_LANG_LEN_MASK, TEXT_UTF16_FLAG, TLV_NDEF, TLV_NULL, TLV_TERMINATOR,
    TNF_WELL_KNOWN,
};
use crate::protocol::parser::{be_u32_at, byte_at, slice_at};
use crate::{Error, Result};

const FLAG_MB: u8 = 0x80;
const FLAG_ME: u8 = 0x40;
const FLAG_CF: u8 = 0x20;
const FLAG_SR: u8 = 0x10;
const FLAG_IL: u8 = 0x08;
const TNF_MASK: u8 = 0x07;

/// One NDEF record, unchunked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    /// Type name format, low 3 bits.
    pub tnf: u8,
    /// Record type, at most 255 bytes.
    pub record_type: Vec<u8>,
    /// Record ID, empty when absent.
    pub id: Vec<u8>,
    /// Record payload.
    pub payload: Vec<u8>,
}

/// Borrowed view of a decoded text record payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPayload<'a> {
    /// IANA language code, ASCII.
    pub language: &'a [u8],
    /// Text bytes after the language code.
    pub body: &'a [u8],
    /// Body is UTF-16 rather than UTF-8.
    pub utf16: bool,
}

impl NdefRecord {
    /// Record from its parts. TNF bits above the low three are dropped.
    pub fn new(tnf: u8, record_type: &[u8], id: &[u8], payload: Vec<u8>) -> Self {
        Self {
            tnf: tnf & TNF_MASK,
            record_type: record_type.to_vec(),
            id: id.to_vec(),
            payload,
        }
    }

    /// Well-known Text record with a UTF-8 body.
    pub fn text(language: &str, text: &str) -> Result<Self> {
        Self::text_from_bytes(language, text.as_bytes())
    }

    /// Well-known Text record around an already encoded body.
    pub fn text_from_bytes(language: &str, body: &[u8]) -> Result<Self> {
        if !language.is_ascii() || language.len() > TEXT_LANG_LEN_MASK as usize {
            return Err(Error::MalformedInput(format!(
                "language code {:?} must be ASCII and at most {} bytes",
                language, TEXT_LANG_LEN_MASK
            )));
        }
        let mut payload = Vec::with_capacity(1 + language.len() + body.len());
        // UTF-8 flag (bit 7) stays clear
        payload.push(language.len() as u8);
        payload.extend_from_slice(language.as_bytes());
        payload.extend_from_slice(body);
        Ok(Self::new(TNF_WELL_KNOWN, RTD_TEXT, &[], payload))
    }

    /// Well-known `T` record.
    pub fn is_text(&self) -> bool {
        self.tnf == TNF_WELL_KNOWN && self.record_type == RTD_TEXT
    }

    /// Decode the text payload. Non-text records fail with
    /// `UnsupportedRecordType`, a truncated payload with `MalformedPayload`.
    pub fn text_payload(&self) -> Result<TextPayload<'_>> {
        if !self.is_text() {
            return Err(Error::UnsupportedRecordType {
                tnf: self.tnf,
                record_type: self.record_type.clone(),
            });
        }
        let status = *self
            .payload
            .first()
            .ok_or_else(|| Error::MalformedPayload("empty text payload".into()))?;
        let lang_len = (status & TEXT_LANG_LEN_MASK) as usize;
        if lang_len >= self.payload.len() {
            return Err(Error::MalformedPayload(format!(
                "language code length {} exceeds payload of {} bytes",
                lang_len,
                self.payload.len()
            )));
        }
        Ok(TextPayload {
            language: &self.payload[1..1 + lang_len],
            body: &self.payload[1 + lang_len..],
            utf16: status & TEXT_UTF16_FLAG != 0,
        })
    }

    fn encode_into(&self, out: &mut Vec<u8>, first: bool, last: bool) -> Result<()> {
        let type_len = u8_len(self.record_type.len())?;
        let id_len = u8_len(self.id.len())?;
        let payload_len = u32::try_from(self.payload.len()).map_err(|_| Error::InvalidLength {
            expected: u32::MAX as usize,
            actual: self.payload.len(),
        })?;
        let short = payload_len <= u32::from(u8::MAX);

        let mut header = self.tnf & TNF_MASK;
        if first {
            header |= FLAG_MB;
        }
        if last {
            header |= FLAG_ME;
        }
        if short {
            header |= FLAG_SR;
        }
        if id_len > 0 {
            header |= FLAG_IL;
        }

        out.push(header);
        out.push(type_len);
        if short {
            out.push(payload_len as u8);
        } else {
            out.extend_from_slice(&payload_len.to_be_bytes());
        }
        if id_len > 0 {
            out.push(id_len);
        }
        out.extend_from_slice(&self.record_type);
        out.extend_from_slice(&self.id);
        out.extend_from_slice(&self.payload);
        Ok(())
    }
}

/// Fit a length into a one-byte header field.
fn u8_len(len: usize) -> Result<u8> {
    u8::try_from(len).map_err(|_| Error::InvalidLength {
        expected: u8::MAX as usize,
        actual: len,
    })
}

/// Ordered records, first flagged MB and last ME.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefMessage {
    records: Vec<NdefRecord>,
}

impl NdefMessage {
    /// Message from records in order.
    pub fn new(records: Vec<NdefRecord>) -> Self {
        Self { records }
    }

    /// One-record message.
    pub fn single(record: NdefRecord) -> Self {
        Self::new(vec![record])
    }

    /// All records.
    pub fn records(&self) -> &[NdefRecord] {
        &self.records
    }

    /// Record 0, if any.
    pub fn first(&self) -> Option<&NdefRecord> {
        self.records.first()
    }

    /// Serialize every record. A type or ID over 255 bytes fails with
    /// `InvalidLength`.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let count = self.records.len();
        for (i, record) in self.records.iter().enumerate() {
            record.encode_into(&mut out, i == 0, i + 1 == count)?;
        }
        Ok(out)
    }

    /// Parse a complete message. Chunked records are rejected.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let malformed = |what: &str| Error::MalformedPayload(what.to_string());
        if bytes.is_empty() {
            return Err(malformed("empty NDEF message"));
        }

        let mut records = Vec::new();
        let mut pos = 0usize;
        loop {
            let header = byte_at(bytes, pos).map_err(|_| malformed("truncated record header"))?;
            if records.is_empty() && header & FLAG_MB == 0 {
                return Err(malformed("first record lacks the message-begin flag"));
            }
            if header & FLAG_CF != 0 {
                return Err(malformed("chunked records are not supported"));
            }

            let type_len = byte_at(bytes, pos + 1).map_err(|_| malformed("truncated type length"))?
                as usize;
            pos += 2;

            let payload_len = if header & FLAG_SR != 0 {
                let len = byte_at(bytes, pos).map_err(|_| malformed("truncated payload length"))?;
                pos += 1;
                len as usize
            } else {
                let len = be_u32_at(bytes, pos).map_err(|_| malformed("truncated payload length"))?;
                pos += 4;
                len as usize
            };

            let id_len = if header & FLAG_IL != 0 {
                let len = byte_at(bytes, pos).map_err(|_| malformed("truncated id length"))?;
                pos += 1;
                len as usize
            } else {
                0
            };

            let record_type = slice_at(bytes, pos, type_len).map_err(|_| malformed("truncated type"))?;
            pos += type_len;
            let id = slice_at(bytes, pos, id_len).map_err(|_| malformed("truncated id"))?;
            pos += id_len;
            let payload =
                slice_at(bytes, pos, payload_len).map_err(|_| malformed("truncated payload"))?;
            pos += payload_len;

            records.push(NdefRecord::new(header & TNF_MASK, record_type, id, payload.to_vec()));

            if header & FLAG_ME != 0 {
                break;
            }
        }

        Ok(Self { records })
    }
}

/// Largest value the 3-byte TLV length form can carry; `FFFF` is reserved.
pub const TLV_MAX_LEN: usize = 0xFFFE;

/// Wrap an encoded message in an NDEF TLV followed by a terminator TLV.
pub fn wrap_tlv(message: &[u8]) -> Result<Vec<u8>> {
    if message.len() > TLV_MAX_LEN {
        return Err(Error::InvalidLength {
            expected: TLV_MAX_LEN,
            actual: message.len(),
        });
    }
    let mut tlv = Vec::with_capacity(message.len() + 5);
    tlv.push(TLV_NDEF);
    if message.len() < 0xFF {
        tlv.push(message.len() as u8);
    } else {
        tlv.push(0xFF);
        tlv.extend_from_slice(&(message.len() as u16).to_be_bytes());
    }
    tlv.extend_from_slice(message);
    tlv.push(TLV_TERMINATOR);
    Ok(tlv)
}

/// Locate the first NDEF TLV in a Type 2 data area and return its value.
/// NULL TLVs are skipped, other TLVs are stepped over by their length.
pub fn unwrap_tlv(area: &[u8]) -> Result<&[u8]> {
    let mut pos = 0usize;
    while pos < area.len() {
        let tag = area[pos];
        match tag {
            TLV_NULL => {
                pos += 1;
                continue;
            }
            TLV_TERMINATOR => break,
            _ => {}
        }

        let (len, header) = match byte_at(area, pos + 1)? {
            0xFF => {
                let hi = byte_at(area, pos + 2)?;
                let lo = byte_at(area, pos + 3)?;
                (u16::from_be_bytes([hi, lo]) as usize, 4)
            }
            short => (short as usize, 2),
        };
        let value = slice_at(area, pos + header, len)?;
        if tag == TLV_NDEF {
            return Ok(value);
        }
        pos += header + len;
    }
    Err(Error::MalformedPayload("no NDEF TLV in data area".into()))
}
