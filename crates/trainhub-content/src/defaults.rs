//! Built-in seed content shown before anything has ever been saved.

use crate::model::{thumbnail_url, ContentBundle, LocaleText, SiteConfig, TrainingProcess, Video};

fn video(id: &str, vi: &str, th: &str) -> Video {
    Video {
        id: id.to_string(),
        title: LocaleText::new(vi, th),
        thumbnail_url: thumbnail_url(id),
    }
}

fn process(
    id: &str,
    title: (&str, &str),
    description: (&str, &str),
    icon: &str,
    videos: Vec<Video>,
) -> TrainingProcess {
    TrainingProcess {
        id: id.to_string(),
        title: LocaleText::new(title.0, title.1),
        description: LocaleText::new(description.0, description.1),
        icon: icon.to_string(),
        videos,
    }
}

pub fn initial_site_config() -> SiteConfig {
    SiteConfig {
        logo_url: "/logo.png".to_string(),
        title: LocaleText::new("Cổng Đào Tạo Nội Bộ", "พอร์ทัลการฝึกอบรมภายใน"),
        subtitle: LocaleText::new(
            "Nâng cao kỹ năng, đảm bảo an toàn và chất lượng trong mọi quy trình sản xuất.",
            "พัฒนาทักษะ รับรองความปลอดภัยและคุณภาพในทุกกระบวนการผลิต",
        ),
        site_name: LocaleText::new("Nhà Máy ABC", "โรงงาน ABC"),
    }
}

pub fn initial_training_data() -> Vec<TrainingProcess> {
    vec![
        process(
            "p1",
            ("An Toàn Lao Động", "ความปลอดภัยในการทำงาน"),
            (
                "Các quy tắc và thực hành an toàn cốt lõi tại nơi làm việc.",
                "กฎและแนวทางปฏิบัติด้านความปลอดภัยที่สำคัญในที่ทำงาน",
            ),
            "SafetyIcon",
            vec![
                video(
                    "GRSBY2V-cWk",
                    "Video 1: Giới thiệu về An toàn lao động",
                    "วิดีโอ 1: ความรู้เบื้องต้นเกี่ยวกับความปลอดภัยในการทำงาน",
                ),
                video(
                    "dQw4w9WgXcQ",
                    "Video 2: Sử dụng thiết bị bảo hộ cá nhân (PPE)",
                    "วิดีโอ 2: การใช้อุปกรณ์ป้องกันส่วนบุคคล (PPE)",
                ),
                video(
                    "3JZ_D3WCdjQ",
                    "Video 3: Quy trình xử lý khi có sự cố",
                    "วิดีโอ 3: ขั้นตอนการจัดการเหตุการณ์",
                ),
            ],
        ),
        process(
            "p2",
            ("Vận Hành Máy Móc", "การทำงานของเครื่องจักร"),
            (
                "Hướng dẫn chi tiết vận hành các loại máy móc chính.",
                "คำแนะนำโดยละเอียดสำหรับการทำงานของเครื่องจักรหลัก",
            ),
            "MachineOperationIcon",
            vec![
                video(
                    "yPYZpwSpKmA",
                    "Vận hành máy CNC - Phần 1",
                    "การทำงานของเครื่อง CNC - ส่วนที่ 1",
                ),
                video(
                    "EPoG2s2pZis",
                    "Vận hành máy CNC - Phần 2",
                    "การทำงานของเครื่อง CNC - ส่วนที่ 2",
                ),
                video(
                    "b-Aqi1-6L0I",
                    "Bảo trì máy móc định kỳ",
                    "การบำรุงรักษาเครื่องจักรตามปกติ",
                ),
                video("v2aC42y9Jqg", "Xử lý lỗi thường gặp", "การแก้ไขปัญหาทั่วไป"),
            ],
        ),
        process(
            "p3",
            ("Kiểm Soát Chất Lượng", "การควบคุมคุณภาพ"),
            (
                "Quy trình đảm bảo chất lượng sản phẩm đầu ra.",
                "กระบวนการเพื่อให้แน่ใจว่าคุณภาพของผลิตภัณฑ์ đầu ra",
            ),
            "QualityControlIcon",
            vec![
                video(
                    "U_ySGSYtQQ4",
                    "Các tiêu chuẩn chất lượng ISO 9001",
                    "มาตรฐานคุณภาพ ISO 9001",
                ),
                video("Vb6kFp5aOPY", "Sử dụng dụng cụ đo lường", "การใช้เครื่องมือวัด"),
                video(
                    "sioEY4-D_bA",
                    "Phân loại và xử lý sản phẩm lỗi",
                    "การจำแนกและจัดการผลิตภัณฑ์ที่บกพร่อง",
                ),
            ],
        ),
        process(
            "p4",
            ("Logistics & Kho Vận", "โลจิสติกส์และคลังสินค้า"),
            (
                "Quy trình xuất, nhập và quản lý hàng tồn kho.",
                "กระบวนการส่งออก นำเข้า และจัดการสินค้าคงคลัง",
            ),
            "LogisticsIcon",
            vec![
                video(
                    "i63a-T_n8GA",
                    "Giới thiệu hệ thống kho vận",
                    "ความรู้เบื้องต้นเกี่ยวกับระบบคลังสินค้า",
                ),
                video("HliAoes2wQA", "Quy trình nhập kho", "กระบวนการนำเข้าคลังสินค้า"),
                video("7zW3a_2d9F4", "Quy trình xuất kho", "กระบวนการส่งออกจากคลังสินค้า"),
                video(
                    "Vn4M2deO3F4",
                    "Sắp xếp và tối ưu không gian kho",
                    "การจัดระเบียบและเพิ่มประสิทธิภาพพื้นที่คลังสินค้า",
                ),
            ],
        ),
        process(
            "p5",
            ("Phòng Cháy Chữa Cháy", "การป้องกันอัคคีภัย"),
            (
                "Các kỹ năng cần thiết để phòng và xử lý hỏa hoạn.",
                "ทักษะที่จำเป็นในการป้องกันและจัดการกับอัคคีภัย",
            ),
            "FireSafetyIcon",
            vec![
                video(
                    "wunV2-124E8",
                    "Nhận biết các loại bình chữa cháy",
                    "การรู้จักประเภทของถังดับเพลิง",
                ),
                video(
                    "VYOjWnS4cMY",
                    "Thực hành sử dụng bình chữa cháy CO2",
                    "การฝึกใช้ถังดับเพลิง CO2",
                ),
                video(
                    "Fis0-q28K78",
                    "Kỹ năng thoát hiểm khi có cháy",
                    "ทักษะการหลบหนีเมื่อเกิดเพลิงไหม้",
                ),
            ],
        ),
    ]
}

pub fn initial_content() -> ContentBundle {
    ContentBundle {
        site_config: initial_site_config(),
        training_data: initial_training_data(),
    }
}
