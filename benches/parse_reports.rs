use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use metar_decoder::{DecoderConfig, ReportParser, parse_group};

const METAR: &str = "METAR KORD 121151Z 27015G25KT 1 1/2SM R28L/2400V4000FT/U -SN BR OVC005 \
     M01/M02 A3002 RMK AO2 PK WND 28045/15 WSHFT 1715 FROPA CIG 005V010 SLP166 T10111022 \
     10022 21011 P0009 60217 52032 8/6// FRQ LTGICCG DSNT NE-SE";

const TAF: &str = "TAF EGLL 121100Z 1212/1318 24012KT 9999 BKN030 TEMPO 1212/1216 7000 -SHRA \
     PROB30 1300/1306 BKN012 BECMG 1310/1312 30015G25KT";

fn bench_parse(c: &mut Criterion) {
    let parser = ReportParser::new(DecoderConfig::default());
    let mut group = c.benchmark_group("parse_report");

    for (name, report) in [("metar_with_remarks", METAR), ("taf_with_trends", TAF)] {
        group.throughput(Throughput::Elements(report.split_whitespace().count() as u64));
        group.bench_function(name, |b| b.iter(|| parser.parse(black_box(report))));
    }
    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let parser = ReportParser::new(DecoderConfig::default());
    let result = parser.parse(METAR);

    c.bench_function("rebuild_groups", |b| {
        b.iter(|| {
            for info in &result.groups {
                black_box(parse_group(&info.raw_string, info.report_part));
            }
        })
    });
}

criterion_group!(benches, bench_parse, bench_rebuild);
criterion_main!(benches);
