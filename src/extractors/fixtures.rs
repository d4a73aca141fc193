//! Construcción de imágenes con EXIF para las pruebas.

pub(crate) const TAG_IMAGE_DESCRIPTION: u16 = 0x010E;
const TAG_MODEL: u16 = 0x0110;
const TAG_EXIF_POINTER: u16 = 0x8769;
const TAG_GPS_POINTER: u16 = 0x8825;
const TAG_DATETIME_ORIGINAL: u16 = 0x9003;
const TAG_GPS_LATITUDE_REF: u16 = 0x0001;
const TAG_GPS_LATITUDE: u16 = 0x0002;
const TAG_GPS_LONGITUDE_REF: u16 = 0x0003;
const TAG_GPS_LONGITUDE: u16 = 0x0004;

const TYPE_ASCII: u16 = 2;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

pub(crate) struct IfdEntry {
    tag: u16,
    kind: u16,
    count: u32,
    data: Vec<u8>,
}

impl IfdEntry {
    pub(crate) fn ascii(tag: u16, text: &str) -> Self {
        let mut data = text.as_bytes().to_vec();
        data.push(0);
        Self {
            tag,
            kind: TYPE_ASCII,
            count: data.len() as u32,
            data,
        }
    }

    fn long(tag: u16, value: u32) -> Self {
        Self {
            tag,
            kind: TYPE_LONG,
            count: 1,
            data: value.to_le_bytes().to_vec(),
        }
    }

    fn rationals(tag: u16, values: &[(u32, u32)]) -> Self {
        let mut data = Vec::with_capacity(values.len() * 8);
        for (num, denom) in values {
            data.extend_from_slice(&num.to_le_bytes());
            data.extend_from_slice(&denom.to_le_bytes());
        }
        Self {
            tag,
            kind: TYPE_RATIONAL,
            count: values.len() as u32,
            data,
        }
    }
}

fn ifd_len(entries: &[IfdEntry]) -> usize {
    let overflow: usize = entries
        .iter()
        .filter(|entry| entry.data.len() > 4)
        .map(|entry| entry.data.len())
        .sum();
    2 + 12 * entries.len() + 4 + overflow
}

fn write_ifd(out: &mut Vec<u8>, entries: &[IfdEntry]) {
    let offset = out.len();
    let mut data_offset = offset + 2 + 12 * entries.len() + 4;
    let mut overflow = Vec::new();

    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in entries {
        out.extend_from_slice(&entry.tag.to_le_bytes());
        out.extend_from_slice(&entry.kind.to_le_bytes());
        out.extend_from_slice(&entry.count.to_le_bytes());
        if entry.data.len() <= 4 {
            let mut inline = [0_u8; 4];
            inline[..entry.data.len()].copy_from_slice(&entry.data);
            out.extend_from_slice(&inline);
        } else {
            out.extend_from_slice(&(data_offset as u32).to_le_bytes());
            overflow.extend_from_slice(&entry.data);
            data_offset += entry.data.len();
        }
    }
    out.extend_from_slice(&0_u32.to_le_bytes());
    out.extend_from_slice(&overflow);
}

/// Arma un bloque TIFF little-endian con IFD0 y, opcionalmente, los IFD EXIF y GPS.
pub(crate) fn build_tiff(mut ifd0: Vec<IfdEntry>, exif: Vec<IfdEntry>, gps: Vec<IfdEntry>) -> Vec<u8> {
    let pointer_count = usize::from(!exif.is_empty()) + usize::from(!gps.is_empty());
    let ifd0_len = ifd_len(&ifd0) + 12 * pointer_count;
    let exif_offset = 8 + ifd0_len;
    let gps_offset = exif_offset + if exif.is_empty() { 0 } else { ifd_len(&exif) };

    if !exif.is_empty() {
        ifd0.push(IfdEntry::long(TAG_EXIF_POINTER, exif_offset as u32));
    }
    if !gps.is_empty() {
        ifd0.push(IfdEntry::long(TAG_GPS_POINTER, gps_offset as u32));
    }

    let mut out = b"II\x2A\x00".to_vec();
    out.extend_from_slice(&8_u32.to_le_bytes());
    write_ifd(&mut out, &ifd0);
    if !exif.is_empty() {
        write_ifd(&mut out, &exif);
    }
    if !gps.is_empty() {
        write_ifd(&mut out, &gps);
    }
    out
}

/// TIFF con modelo, fecha de captura y GPS `lat_deg°lat_min'lat_sec" N`, `73°58'0" W`.
pub(crate) fn sample_tiff(lat_deg: u32, lat_min: u32, lat_sec: u32, minutes_denom: u32) -> Vec<u8> {
    build_tiff(
        vec![IfdEntry::ascii(TAG_MODEL, "TestCam X100")],
        vec![IfdEntry::ascii(TAG_DATETIME_ORIGINAL, "2024:05:01 10:20:30")],
        vec![
            IfdEntry::ascii(TAG_GPS_LATITUDE_REF, "N"),
            IfdEntry::rationals(
                TAG_GPS_LATITUDE,
                &[(lat_deg, 1), (lat_min, minutes_denom), (lat_sec, 1)],
            ),
            IfdEntry::ascii(TAG_GPS_LONGITUDE_REF, "W"),
            IfdEntry::rationals(TAG_GPS_LONGITUDE, &[(73, 1), (58, 1), (0, 1)]),
        ],
    )
}

pub(crate) fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE1];
    let segment_len = (2 + 6 + tiff.len()) as u16;
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(tiff);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}
