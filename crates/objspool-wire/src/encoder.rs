//! Record encoder: header, property, and trailer lines.

use objspool_stream::RecordStream;
use objspool_types::{ClassId, PropValue};

use crate::error::WireResult;
use crate::{RecordType, COOKIE_BLANK, COOKIE_END, COOKIE_HEADER, COOKIE_PROP};

/// Open a stream record and write its header line.
///
/// The class name is carried for human readers of the store; the decoder
/// skips it without validation.
pub fn begin_record(
    stream: &mut dyn RecordStream,
    rec_type: RecordType,
    class_id: ClassId,
    version: u32,
    class_name: &str,
) -> WireResult<()> {
    stream.record_begin()?;

    stream.write_byte(COOKIE_HEADER)?;
    stream.write_all(rec_type.tag())?;
    stream.write_all(b":1:")?;
    stream.write_all(class_id.get().to_string().as_bytes())?;
    stream.write_byte(b':')?;
    stream.write_all(version.to_string().as_bytes())?;
    stream.write_byte(b':')?;
    stream.write_all(class_name.as_bytes())?;
    stream.write_all(b":\n")?;
    Ok(())
}

/// Write one property line, or nothing at all when the value is absent.
///
/// An absent value is not an error: omission is how "this property has no
/// value" is represented on the wire, and the decoder simply never yields
/// the property.
pub fn write_property(
    stream: &mut dyn RecordStream,
    name: &str,
    value: Option<&PropValue>,
) -> WireResult<()> {
    let value = match value {
        Some(value) => value,
        None => return Ok(()),
    };

    let rendered;
    let payload: &[u8] = match value {
        PropValue::String(bytes) => bytes,
        PropValue::Number(n) => {
            rendered = n.to_string().into_bytes();
            &rendered
        }
        PropValue::Timestamp(t) => {
            rendered = t.to_string().into_bytes();
            &rendered
        }
    };

    stream.write_byte(COOKIE_PROP)?;
    stream.write_all(name.as_bytes())?;
    stream.write_byte(b':')?;
    stream.write_all(value.kind().tag().to_string().as_bytes())?;
    stream.write_byte(b':')?;
    stream.write_all(payload.len().to_string().as_bytes())?;
    stream.write_byte(b':')?;
    stream.write_all(payload)?;
    stream.write_all(b":\n")?;
    Ok(())
}

/// Write the record trailer and close the stream record.
pub fn end_record(stream: &mut dyn RecordStream) -> WireResult<()> {
    stream.write_byte(COOKIE_END)?;
    stream.write_all(b"End\n")?;
    stream.write_byte(COOKIE_BLANK)?;
    stream.write_byte(b'\n')?;

    stream.record_end()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use objspool_stream::MemoryStream;
    use objspool_types::LogTime;

    fn class_id(raw: i64) -> ClassId {
        ClassId::new(raw).unwrap()
    }

    #[test]
    fn object_header_line() {
        let mut s = MemoryStream::new();
        begin_record(&mut s, RecordType::Object, class_id(5), 1, "myclass").unwrap();
        assert_eq!(s.as_bytes(), b"<Obj:1:5:1:myclass:\n");
    }

    #[test]
    fn prop_bag_header_line() {
        let mut s = MemoryStream::new();
        begin_record(&mut s, RecordType::PropBag, class_id(3), 2, "queue").unwrap();
        assert_eq!(s.as_bytes(), b"<OPB:1:3:2:queue:\n");
    }

    #[test]
    fn number_property_line() {
        let mut s = MemoryStream::new();
        write_property(&mut s, "count", Some(&PropValue::Number(7))).unwrap();
        assert_eq!(s.as_bytes(), b"+count:2:1:7:\n");
    }

    #[test]
    fn negative_number_length_covers_sign() {
        let mut s = MemoryStream::new();
        write_property(&mut s, "delta", Some(&PropValue::Number(-42))).unwrap();
        assert_eq!(s.as_bytes(), b"+delta:2:3:-42:\n");
    }

    #[test]
    fn string_property_keeps_raw_bytes() {
        let mut s = MemoryStream::new();
        write_property(&mut s, "msg", Some(&PropValue::String(b"a:b\nc".to_vec()))).unwrap();
        assert_eq!(s.as_bytes(), b"+msg:1:5:a:b\nc:\n");
    }

    #[test]
    fn absent_value_writes_nothing() {
        let mut s = MemoryStream::new();
        write_property(&mut s, "ghost", None).unwrap();
        assert!(s.as_bytes().is_empty());
    }

    #[test]
    fn timestamp_property_line() {
        let t = LogTime {
            time_type: 1,
            year: 2024,
            month: 6,
            day: 2,
            hour: 8,
            minute: 30,
            second: 0,
            sec_frac: 0,
            sec_frac_precision: 0,
            offset_sign: '+',
            offset_hour: 2,
            offset_minute: 0,
        };
        let mut s = MemoryStream::new();
        write_property(&mut s, "stamp", Some(&PropValue::Timestamp(t))).unwrap();
        assert_eq!(
            s.as_bytes(),
            b"+stamp:3:27:1:2024:6:2:8:30:0:0:0:+:2:0:\n".as_slice()
        );
    }

    #[test]
    fn trailer_bytes() {
        let mut s = MemoryStream::new();
        end_record(&mut s).unwrap();
        assert_eq!(s.as_bytes(), b">End\n.\n");
    }
}
