use crate::record::Record;

/// 25 records: Taipei/Xinyi ×10, Taichung/Xitun ×10, Taipei/Daan ×5.
pub(crate) fn scenario_records() -> Vec<Record> {
    let mut records = Vec::new();
    for i in 0..10 {
        records.push(Record::new("Taipei", "Xinyi", format!("xinyi-{i}")));
    }
    for i in 0..10 {
        records.push(Record::new("Taichung", "Xitun", format!("xitun-{i}")));
    }
    for i in 0..5 {
        let mut record = Record::new("Taipei", "Daan", format!("daan-{i}"));
        record.address = format!("Daan Rd. {i}");
        record.external_url = Some(format!("https://example.org/daan/{i}"));
        records.push(record);
    }
    records
}
