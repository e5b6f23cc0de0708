//! Built-in reference data: regions, their cities and aliases, foreign
//! cities, and the default admin keywords.

use super::types::{Region, RegionKind};

struct BuiltinRegion {
    name: &'static str,
    kind: RegionKind,
    cities: &'static [&'static str],
    aliases: &'static [&'static str],
}

const BUILTIN_REGIONS: &[BuiltinRegion] = &[
    // ─── Municipalities ──────────────────────────────────────────
    BuiltinRegion {
        name: "北京",
        kind: RegionKind::Municipality,
        cities: &["北京"],
        aliases: &["京"],
    },
    BuiltinRegion {
        name: "上海",
        kind: RegionKind::Municipality,
        cities: &["上海"],
        aliases: &["沪"],
    },
    BuiltinRegion {
        name: "天津",
        kind: RegionKind::Municipality,
        cities: &["天津"],
        aliases: &["津"],
    },
    BuiltinRegion {
        name: "重庆",
        kind: RegionKind::Municipality,
        cities: &["重庆"],
        aliases: &["渝"],
    },
    // ─── Provinces and autonomous regions ──────────────────────────
    BuiltinRegion {
        name: "广东",
        kind: RegionKind::Province,
        cities: &[
            "广州", "深圳", "珠海", "汕头", "佛山", "韶关", "湛江", "肇庆", "江门", "茂名", "惠州", "梅州",
            "汕尾", "河源", "阳江", "清远", "东莞", "中山", "潮州", "揭阳", "云浮",
        ],
        aliases: &["粤"],
    },
    BuiltinRegion {
        name: "浙江",
        kind: RegionKind::Province,
        cities: &["杭州", "宁波", "温州", "嘉兴", "湖州", "绍兴", "金华", "衢州", "舟山", "台州", "丽水"],
        aliases: &["浙"],
    },
    BuiltinRegion {
        name: "江苏",
        kind: RegionKind::Province,
        cities: &["南京", "无锡", "徐州", "常州", "苏州", "南通", "连云港", "淮安", "盐城", "扬州", "镇江", "泰州", "宿迁"],
        aliases: &["苏"],
    },
    BuiltinRegion {
        name: "山东",
        kind: RegionKind::Province,
        cities: &[
            "济南", "青岛", "淄博", "枣庄", "东营", "烟台", "潍坊", "济宁", "泰安", "威海", "日照", "临沂",
            "德州", "聊城", "滨州", "菏泽",
        ],
        aliases: &["鲁"],
    },
    BuiltinRegion {
        name: "河南",
        kind: RegionKind::Province,
        cities: &[
            "郑州", "开封", "洛阳", "平顶山", "安阳", "鹤壁", "新乡", "焦作", "濮阳", "许昌", "漯河",
            "三门峡", "南阳", "商丘", "信阳", "周口", "驻马店",
        ],
        aliases: &["豫"],
    },
    BuiltinRegion {
        name: "湖北",
        kind: RegionKind::Province,
        cities: &["武汉", "黄石", "十堰", "宜昌", "襄阳", "鄂州", "荆门", "孝感", "荆州", "黄冈", "咸宁", "随州", "恩施"],
        aliases: &["鄂"],
    },
    BuiltinRegion {
        name: "湖南",
        kind: RegionKind::Province,
        cities: &[
            "长沙", "株洲", "湘潭", "衡阳", "邵阳", "岳阳", "常德", "张家界", "益阳", "郴州", "永州", "怀化",
            "娄底", "湘西",
        ],
        aliases: &["湘"],
    },
    BuiltinRegion {
        name: "河北",
        kind: RegionKind::Province,
        cities: &["石家庄", "唐山", "秦皇岛", "邯郸", "邢台", "保定", "张家口", "承德", "沧州", "廊坊", "衡水"],
        aliases: &["冀"],
    },
    BuiltinRegion {
        name: "山西",
        kind: RegionKind::Province,
        cities: &["太原", "大同", "阳泉", "长治", "晋城", "朔州", "晋中", "运城", "忻州", "临汾", "吕梁"],
        aliases: &["晋"],
    },
    BuiltinRegion {
        name: "内蒙古",
        kind: RegionKind::Autonomous,
        cities: &["呼和浩特", "包头", "乌海", "赤峰", "通辽", "鄂尔多斯", "呼伦贝尔", "巴彦淖尔", "乌兰察布"],
        aliases: &["内蒙古自治区", "内蒙"],
    },
    BuiltinRegion {
        name: "辽宁",
        kind: RegionKind::Province,
        cities: &[
            "沈阳", "大连", "鞍山", "抚顺", "本溪", "丹东", "锦州", "营口", "阜新", "辽阳", "盘锦", "铁岭",
            "朝阳", "葫芦岛",
        ],
        aliases: &["辽"],
    },
    BuiltinRegion {
        name: "吉林",
        kind: RegionKind::Province,
        cities: &["长春", "吉林", "四平", "辽源", "通化", "白山", "松原", "白城", "延边"],
        aliases: &["吉"],
    },
    BuiltinRegion {
        name: "黑龙江",
        kind: RegionKind::Province,
        cities: &[
            "哈尔滨", "齐齐哈尔", "鸡西", "鹤岗", "双鸭山", "大庆", "伊春", "佳木斯", "七台河", "牡丹江", "黑河",
            "绥化", "大兴安岭",
        ],
        aliases: &["黑"],
    },
    BuiltinRegion {
        name: "陕西",
        kind: RegionKind::Province,
        cities: &["西安", "铜川", "宝鸡", "咸阳", "渭南", "延安", "汉中", "榆林", "安康", "商洛"],
        aliases: &["陕"],
    },
    BuiltinRegion {
        name: "甘肃",
        kind: RegionKind::Province,
        cities: &[
            "兰州", "嘉峪关", "金昌", "白银", "天水", "武威", "张掖", "平凉", "酒泉", "庆阳", "定西", "陇南",
            "临夏", "甘南",
        ],
        aliases: &["甘"],
    },
    BuiltinRegion {
        name: "青海",
        kind: RegionKind::Province,
        cities: &["西宁", "海东", "海北", "黄南", "海南", "果洛", "玉树", "海西"],
        aliases: &["青"],
    },
    BuiltinRegion {
        name: "宁夏",
        kind: RegionKind::Autonomous,
        cities: &["银川", "石嘴山", "吴忠", "固原", "中卫"],
        aliases: &["宁夏回族自治区", "宁"],
    },
    BuiltinRegion {
        name: "新疆",
        kind: RegionKind::Autonomous,
        cities: &[
            "乌鲁木齐", "克拉玛依", "吐鲁番", "哈密", "昌吉", "博尔塔拉", "巴音郭楞", "阿克苏", "克孜勒苏", "喀什",
            "和田", "伊犁", "塔城", "阿勒泰",
        ],
        aliases: &["新疆维吾尔自治区", "新"],
    },
    BuiltinRegion {
        name: "四川",
        kind: RegionKind::Province,
        cities: &[
            "成都", "自贡", "攀枝花", "泸州", "德阳", "绵阳", "广元", "遂宁", "内江", "乐山", "南充", "眉山",
            "宜宾", "广安", "达州", "雅安", "巴中", "资阳", "阿坝", "甘孜", "凉山",
        ],
        aliases: &["川"],
    },
    BuiltinRegion {
        name: "贵州",
        kind: RegionKind::Province,
        cities: &["贵阳", "六盘水", "遵义", "安顺", "毕节", "铜仁", "黔西南", "黔东南", "黔南"],
        aliases: &["贵"],
    },
    BuiltinRegion {
        name: "云南",
        kind: RegionKind::Province,
        cities: &[
            "昆明", "曲靖", "玉溪", "保山", "昭通", "丽江", "普洱", "临沧", "楚雄", "红河", "文山",
            "西双版纳", "大理", "德宏", "怒江", "迪庆",
        ],
        aliases: &["云"],
    },
    BuiltinRegion {
        name: "西藏",
        kind: RegionKind::Autonomous,
        cities: &["拉萨", "日喀则", "昌都", "林芝", "山南", "那曲", "阿里"],
        aliases: &["西藏自治区", "藏"],
    },
    BuiltinRegion {
        name: "安徽",
        kind: RegionKind::Province,
        cities: &[
            "合肥", "芜湖", "蚌埠", "淮南", "马鞍山", "淮北", "铜陵", "安庆", "黄山", "滁州", "阜阳", "宿州",
            "六安", "亳州", "池州", "宣城",
        ],
        aliases: &["皖"],
    },
    BuiltinRegion {
        name: "江西",
        kind: RegionKind::Province,
        cities: &["南昌", "景德镇", "萍乡", "九江", "新余", "鹰潭", "赣州", "吉安", "宜春", "抚州", "上饶"],
        aliases: &["赣"],
    },
    BuiltinRegion {
        name: "福建",
        kind: RegionKind::Province,
        cities: &["福州", "厦门", "莆田", "三明", "泉州", "漳州", "南平", "龙岩", "宁德"],
        aliases: &["闽"],
    },
    BuiltinRegion {
        name: "广西",
        kind: RegionKind::Autonomous,
        cities: &[
            "南宁", "柳州", "桂林", "梧州", "北海", "防城港", "钦州", "贵港", "玉林", "百色", "贺州", "河池",
            "来宾", "崇左",
        ],
        aliases: &["广西壮族自治区", "桂"],
    },
    BuiltinRegion {
        name: "海南",
        kind: RegionKind::Province,
        cities: &["海口", "三亚", "三沙", "儋州"],
        aliases: &["琼"],
    },
    // ─── Special administrative regions ────────────────────────────
    BuiltinRegion {
        name: "香港",
        kind: RegionKind::Special,
        cities: &["香港"],
        aliases: &["港"],
    },
    BuiltinRegion {
        name: "澳门",
        kind: RegionKind::Special,
        cities: &["澳门"],
        aliases: &["澳"],
    },
    BuiltinRegion {
        name: "台湾",
        kind: RegionKind::Special,
        cities: &["台北", "高雄", "台中", "台南", "新北"],
        aliases: &["台"],
    },
];

/// Foreign cities in match order.
const FOREIGN_CITIES: &[&str] = &[
    "多伦多", "温哥华", "蒙特利尔", "渥太华", // Canada
    "纽约", "洛杉矶", "芝加哥", "休斯顿", "西雅图", // United States
    "伦敦", "曼彻斯特", "利物浦", // United Kingdom
    "巴黎", "马赛", "里昂", // France
    "柏林", "慕尼黑", "汉堡", // Germany
    "东京", "大阪", "名古屋", // Japan
    "首尔", "釜山", "仁川", // South Korea
    "新加坡", // Singapore
    "悉尼", "墨尔本", "布里斯班", // Australia
    "迪拜", "阿布扎比", // UAE
    "莫斯科", "圣彼得堡", // Russia
    "马德里", "巴塞罗那", // Spain
    "米兰", "罗马", "威尼斯", // Italy
];

/// Admin keywords used when no configuration overrides them.
pub const DEFAULT_ADMIN_KEYWORDS: &[&str] = &["马哥", "班", "豆"];

fn to_region(r: &BuiltinRegion) -> Region {
    Region {
        name: r.name.to_string(),
        kind: r.kind,
        cities: r.cities.iter().map(|c| c.to_string()).collect(),
        aliases: r.aliases.iter().map(|a| a.to_string()).collect(),
    }
}

/// The full built-in region table, in declaration order.
pub fn builtin_regions() -> Vec<Region> {
    BUILTIN_REGIONS.iter().map(to_region).collect()
}

/// The built-in foreign city list, in match order.
pub fn builtin_foreign_cities() -> Vec<String> {
    FOREIGN_CITIES.iter().map(|c| c.to_string()).collect()
}

pub fn default_admin_keywords() -> Vec<String> {
    DEFAULT_ADMIN_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_region_count() {
        let regions = builtin_regions();
        assert_eq!(regions.len(), 34);
        let municipalities = regions
            .iter()
            .filter(|r| r.kind == RegionKind::Municipality)
            .count();
        assert_eq!(municipalities, 4);
    }

    #[test]
    fn test_builtin_region_names_unique() {
        let regions = builtin_regions();
        let names: HashSet<_> = regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), regions.len());
    }

    #[test]
    fn test_builtin_foreign_order() {
        let foreign = builtin_foreign_cities();
        assert_eq!(foreign.first().map(String::as_str), Some("多伦多"));
        assert_eq!(foreign.last().map(String::as_str), Some("威尼斯"));
        assert!(foreign.contains(&"纽约".to_string()));
    }

    #[test]
    fn test_builtin_aliases() {
        let regions = builtin_regions();
        let shanghai = regions.iter().find(|r| r.name == "上海").unwrap();
        assert_eq!(shanghai.aliases, vec!["沪".to_string()]);
        let nmg = regions.iter().find(|r| r.name == "内蒙古").unwrap();
        assert_eq!(nmg.kind, RegionKind::Autonomous);
        assert!(nmg.aliases.contains(&"内蒙".to_string()));
    }
}
