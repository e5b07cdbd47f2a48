//! Built-in simplified→traditional term table.
//!
//! Curated for source-code and documentation text: multi-character technical
//! vocabulary first (converted as whole units by the longest-match pass),
//! then general two-character words, then single characters. Table order is
//! the tie-break order for equal-length keys, so more specific entries of a
//! length should stay above generic ones.
//!
//! Every traditional form here contains at least one character that never
//! appears as a key, so one mapping's output can never be rewritten by a
//! later mapping in the same pass.

/// The immutable built-in mapping set, injected into
/// [`DictStore`](super::DictStore) at construction.
pub static BUILTIN_MAPPINGS: &[(&str, &str)] = &[
    // Technical terms, four characters and longer
    ("应用程序", "應用程式"),
    ("操作系统", "作業系統"),
    ("数据结构", "資料結構"),
    ("人工智能", "人工智慧"),
    ("机器学习", "機器學習"),
    ("深度学习", "深度學習"),
    ("神经网络", "神經網路"),
    ("编程语言", "程式語言"),
    ("面向对象", "物件導向"),
    ("局域网", "區域網路"),
    ("数据库", "資料庫"),
    ("服务器", "伺服器"),
    ("源代码", "原始碼"),
    ("字符串", "字串"),
    ("文件夹", "資料夾"),
    ("浏览器", "瀏覽器"),
    ("默认值", "預設值"),
    ("兼容性", "相容性"),
    ("分布式", "分散式"),
    ("二进制", "二進位"),
    ("十六进制", "十六進位"),
    ("计算机", "計算機"),
    // Software vocabulary, two characters
    ("软件", "軟體"),
    ("硬件", "硬體"),
    ("网络", "網路"),
    ("信息", "資訊"),
    ("程序", "程式"),
    ("对象", "物件"),
    ("内存", "記憶體"),
    ("文件", "檔案"),
    ("文档", "文檔"),
    ("打印", "列印"),
    ("默认", "預設"),
    ("设置", "設定"),
    ("用户", "使用者"),
    ("支持", "支援"),
    ("屏幕", "螢幕"),
    ("鼠标", "滑鼠"),
    ("光标", "游標"),
    ("菜单", "選單"),
    ("组件", "元件"),
    ("变量", "變數"),
    ("函数", "函式"),
    ("数组", "陣列"),
    ("队列", "佇列"),
    ("线程", "執行緒"),
    ("进程", "行程"),
    ("循环", "迴圈"),
    ("注释", "註解"),
    ("调试", "除錯"),
    ("端口", "連接埠"),
    ("缓存", "快取"),
    ("磁盘", "磁碟"),
    ("硬盘", "硬碟"),
    ("视频", "影片"),
    ("音频", "音訊"),
    ("智能", "智慧"),
    ("项目", "專案"),
    ("接口", "介面"),
    ("代码", "程式碼"),
    ("异步", "非同步"),
    ("加载", "載入"),
    ("登录", "登入"),
    ("注册", "註冊"),
    ("密码", "密碼"),
    ("权限", "權限"),
    ("标签", "標籤"),
    ("图标", "圖示"),
    ("下载", "下載"),
    ("上传", "上傳"),
    ("链接", "連結"),
    ("邮件", "郵件"),
    ("搜索", "搜尋"),
    ("发布", "發佈"),
    ("升级", "升級"),
    ("安装", "安裝"),
    ("备份", "備份"),
    ("还原", "還原"),
    ("保存", "儲存"),
    ("复制", "複製"),
    ("粘贴", "貼上"),
    ("删除", "刪除"),
    ("启动", "啟動"),
    ("关闭", "關閉"),
    ("运行", "執行"),
    ("测试", "測試"),
    ("转换", "轉換"),
    ("简体", "簡體"),
    ("繁体", "繁體"),
    ("错误", "錯誤"),
    ("报告", "報告"),
    ("编译", "編譯"),
    ("编码", "編碼"),
    ("解码", "解碼"),
    ("优化", "最佳化"),
    // Single characters: 讠-series
    ("计", "計"),
    ("订", "訂"),
    ("认", "認"),
    ("讨", "討"),
    ("让", "讓"),
    ("训", "訓"),
    ("议", "議"),
    ("讯", "訊"),
    ("记", "記"),
    ("讲", "講"),
    ("许", "許"),
    ("论", "論"),
    ("设", "設"),
    ("访", "訪"),
    ("证", "證"),
    ("评", "評"),
    ("识", "識"),
    ("诉", "訴"),
    ("诊", "診"),
    ("词", "詞"),
    ("译", "譯"),
    ("试", "試"),
    ("诗", "詩"),
    ("诚", "誠"),
    ("话", "話"),
    ("诞", "誕"),
    ("询", "詢"),
    ("该", "該"),
    ("详", "詳"),
    ("语", "語"),
    ("误", "誤"),
    ("诱", "誘"),
    ("说", "說"),
    ("请", "請"),
    ("诸", "諸"),
    ("诺", "諾"),
    ("读", "讀"),
    ("课", "課"),
    ("谁", "誰"),
    ("调", "調"),
    ("谅", "諒"),
    ("谈", "談"),
    ("谊", "誼"),
    ("谋", "謀"),
    ("谜", "謎"),
    ("谢", "謝"),
    ("谣", "謠"),
    ("谦", "謙"),
    ("谨", "謹"),
    ("谱", "譜"),
    // 贝-series
    ("贝", "貝"),
    ("负", "負"),
    ("贡", "貢"),
    ("财", "財"),
    ("责", "責"),
    ("贤", "賢"),
    ("败", "敗"),
    ("货", "貨"),
    ("质", "質"),
    ("贩", "販"),
    ("贪", "貪"),
    ("贫", "貧"),
    ("购", "購"),
    ("贯", "貫"),
    ("贵", "貴"),
    ("贷", "貸"),
    ("贸", "貿"),
    ("费", "費"),
    ("贺", "賀"),
    ("贼", "賊"),
    ("资", "資"),
    ("赋", "賦"),
    ("赌", "賭"),
    ("赎", "贖"),
    ("赏", "賞"),
    ("赐", "賜"),
    ("赔", "賠"),
    ("赖", "賴"),
    ("赚", "賺"),
    ("赛", "賽"),
    ("赞", "贊"),
    ("赠", "贈"),
    ("赢", "贏"),
    // 纟-series
    ("纠", "糾"),
    ("红", "紅"),
    ("约", "約"),
    ("级", "級"),
    ("纪", "紀"),
    ("纯", "純"),
    ("纲", "綱"),
    ("纳", "納"),
    ("纵", "縱"),
    ("纷", "紛"),
    ("纸", "紙"),
    ("纹", "紋"),
    ("纺", "紡"),
    ("线", "線"),
    ("练", "練"),
    ("组", "組"),
    ("细", "細"),
    ("织", "織"),
    ("终", "終"),
    ("绍", "紹"),
    ("经", "經"),
    ("绑", "綁"),
    ("结", "結"),
    ("绕", "繞"),
    ("绘", "繪"),
    ("给", "給"),
    ("络", "絡"),
    ("绝", "絕"),
    ("统", "統"),
    ("绣", "繡"),
    ("继", "繼"),
    ("续", "續"),
    ("绩", "績"),
    ("维", "維"),
    ("绵", "綿"),
    ("缓", "緩"),
    ("编", "編"),
    ("缘", "緣"),
    ("缚", "縛"),
    ("缝", "縫"),
    ("缩", "縮"),
    ("缴", "繳"),
    // 钅-series
    ("针", "針"),
    ("钉", "釘"),
    ("钓", "釣"),
    ("钟", "鐘"),
    ("钢", "鋼"),
    ("钥", "鑰"),
    ("钱", "錢"),
    ("钻", "鑽"),
    ("铁", "鐵"),
    ("铃", "鈴"),
    ("铅", "鉛"),
    ("银", "銀"),
    ("铜", "銅"),
    ("铝", "鋁"),
    ("锁", "鎖"),
    ("锅", "鍋"),
    ("错", "錯"),
    ("锦", "錦"),
    ("键", "鍵"),
    ("镇", "鎮"),
    ("镜", "鏡"),
    // 门-series
    ("门", "門"),
    ("闪", "閃"),
    ("闭", "閉"),
    ("问", "問"),
    ("闯", "闖"),
    ("闲", "閒"),
    ("间", "間"),
    ("闷", "悶"),
    ("闹", "鬧"),
    ("阀", "閥"),
    ("阅", "閱"),
    // 马-series
    ("马", "馬"),
    ("驱", "驅"),
    ("驶", "駛"),
    ("驻", "駐"),
    ("驾", "駕"),
    ("验", "驗"),
    ("骑", "騎"),
    ("骗", "騙"),
    // 页-series
    ("页", "頁"),
    ("顶", "頂"),
    ("项", "項"),
    ("顺", "順"),
    ("须", "須"),
    ("顽", "頑"),
    ("顾", "顧"),
    ("顿", "頓"),
    ("颁", "頒"),
    ("颂", "頌"),
    ("预", "預"),
    ("领", "領"),
    ("颇", "頗"),
    ("颈", "頸"),
    ("频", "頻"),
    ("颖", "穎"),
    ("题", "題"),
    ("颜", "顏"),
    ("额", "額"),
    // General single characters
    ("万", "萬"),
    ("与", "與"),
    ("专", "專"),
    ("业", "業"),
    ("东", "東"),
    ("丝", "絲"),
    ("两", "兩"),
    ("严", "嚴"),
    ("丧", "喪"),
    ("个", "個"),
    ("丰", "豐"),
    ("临", "臨"),
    ("为", "為"),
    ("丽", "麗"),
    ("举", "舉"),
    ("义", "義"),
    ("乌", "烏"),
    ("乐", "樂"),
    ("乔", "喬"),
    ("习", "習"),
    ("乡", "鄉"),
    ("书", "書"),
    ("买", "買"),
    ("乱", "亂"),
    ("争", "爭"),
    ("亏", "虧"),
    ("云", "雲"),
    ("亚", "亞"),
    ("产", "產"),
    ("亲", "親"),
    ("亿", "億"),
    ("仅", "僅"),
    ("从", "從"),
    ("仓", "倉"),
    ("仪", "儀"),
    ("们", "們"),
    ("价", "價"),
    ("众", "眾"),
    ("优", "優"),
    ("会", "會"),
    ("伞", "傘"),
    ("传", "傳"),
    ("伤", "傷"),
    ("伦", "倫"),
    ("体", "體"),
    ("余", "餘"),
    ("侠", "俠"),
    ("侣", "侶"),
    ("侦", "偵"),
    ("侧", "側"),
    ("侨", "僑"),
    ("俭", "儉"),
    ("债", "債"),
    ("倾", "傾"),
    ("偿", "償"),
    ("儿", "兒"),
    ("党", "黨"),
    ("兰", "蘭"),
    ("关", "關"),
    ("兴", "興"),
    ("养", "養"),
    ("兽", "獸"),
    ("内", "內"),
    ("册", "冊"),
    ("写", "寫"),
    ("军", "軍"),
    ("农", "農"),
    ("冯", "馮"),
    ("决", "決"),
    ("况", "況"),
    ("冻", "凍"),
    ("净", "淨"),
    ("准", "準"),
    ("凤", "鳳"),
    ("凭", "憑"),
    ("凯", "凱"),
    ("击", "擊"),
    ("刘", "劉"),
    ("则", "則"),
    ("刚", "剛"),
    ("创", "創"),
    ("删", "刪"),
    ("别", "別"),
    ("剑", "劍"),
    ("剧", "劇"),
    ("劝", "勸"),
    ("办", "辦"),
    ("务", "務"),
    ("动", "動"),
    ("励", "勵"),
    ("劳", "勞"),
    ("势", "勢"),
    ("华", "華"),
    ("协", "協"),
    ("单", "單"),
    ("卖", "賣"),
    ("卫", "衛"),
    ("厂", "廠"),
    ("厅", "廳"),
    ("历", "歷"),
    ("厉", "厲"),
    ("压", "壓"),
    ("县", "縣"),
    ("双", "雙"),
    ("变", "變"),
    ("叙", "敘"),
    ("发", "發"),
    ("号", "號"),
    ("叹", "嘆"),
    ("吓", "嚇"),
    ("吕", "呂"),
    ("吗", "嗎"),
    ("吨", "噸"),
    ("听", "聽"),
    ("启", "啟"),
    ("员", "員"),
    ("响", "響"),
    ("哑", "啞"),
    ("唤", "喚"),
    ("喷", "噴"),
    ("嘱", "囑"),
    ("团", "團"),
    ("园", "園"),
    ("围", "圍"),
    ("国", "國"),
    ("图", "圖"),
    ("圆", "圓"),
    ("圣", "聖"),
    ("场", "場"),
    ("坏", "壞"),
    ("块", "塊"),
    ("坚", "堅"),
    ("坛", "壇"),
    ("坟", "墳"),
    ("垫", "墊"),
    ("墙", "牆"),
    ("壮", "壯"),
    ("声", "聲"),
    ("处", "處"),
    ("备", "備"),
    ("够", "夠"),
    ("头", "頭"),
    ("夸", "誇"),
    ("夹", "夾"),
    ("夺", "奪"),
    ("奋", "奮"),
    ("奖", "獎"),
    ("妇", "婦"),
    ("妈", "媽"),
    ("娱", "娛"),
    ("孙", "孫"),
    ("学", "學"),
    ("宁", "寧"),
    ("宝", "寶"),
    ("实", "實"),
    ("宠", "寵"),
    ("审", "審"),
    ("宪", "憲"),
    ("宫", "宮"),
    ("宽", "寬"),
    ("宾", "賓"),
    ("对", "對"),
    ("寻", "尋"),
    ("导", "導"),
    ("寿", "壽"),
    ("将", "將"),
    ("尔", "爾"),
    ("尘", "塵"),
    ("尝", "嘗"),
    ("层", "層"),
    ("届", "屆"),
    ("属", "屬"),
    ("岁", "歲"),
    ("岂", "豈"),
    ("峡", "峽"),
    ("币", "幣"),
    ("帅", "帥"),
    ("师", "師"),
    ("帐", "帳"),
    ("带", "帶"),
    ("帮", "幫"),
    ("广", "廣"),
    ("庄", "莊"),
    ("庆", "慶"),
    ("库", "庫"),
    ("应", "應"),
    ("庙", "廟"),
    ("废", "廢"),
    ("开", "開"),
    ("异", "異"),
    ("弃", "棄"),
    ("弹", "彈"),
    ("强", "強"),
    ("归", "歸"),
    ("当", "當"),
    ("录", "錄"),
    ("彻", "徹"),
    ("径", "徑"),
    ("忆", "憶"),
    ("忧", "憂"),
    ("怀", "懷"),
    ("态", "態"),
    ("怜", "憐"),
    ("总", "總"),
    ("恋", "戀"),
    ("恒", "恆"),
    ("恶", "惡"),
    ("恳", "懇"),
    ("悦", "悅"),
    ("悬", "懸"),
    ("惊", "驚"),
    ("惧", "懼"),
    ("惨", "慘"),
    ("惯", "慣"),
    ("愤", "憤"),
    ("愿", "願"),
    ("懒", "懶"),
    ("戏", "戲"),
    ("战", "戰"),
    ("户", "戶"),
    ("扑", "撲"),
    ("执", "執"),
    ("扩", "擴"),
    ("扫", "掃"),
    ("扬", "揚"),
    ("抚", "撫"),
    ("抛", "拋"),
    ("抢", "搶"),
    ("护", "護"),
    ("报", "報"),
    ("担", "擔"),
    ("拟", "擬"),
    ("拥", "擁"),
    ("拦", "攔"),
    ("择", "擇"),
    ("挂", "掛"),
    ("挡", "擋"),
    ("挤", "擠"),
    ("挥", "揮"),
    ("损", "損"),
    ("换", "換"),
    ("据", "據"),
    ("掷", "擲"),
    ("摄", "攝"),
    ("摆", "擺"),
    ("摇", "搖"),
    ("撑", "撐"),
    ("敌", "敵"),
    ("数", "數"),
    ("断", "斷"),
    ("无", "無"),
    ("旧", "舊"),
    ("时", "時"),
    ("旷", "曠"),
    ("显", "顯"),
    ("晋", "晉"),
    ("晓", "曉"),
    ("晕", "暈"),
    ("暂", "暫"),
    ("术", "術"),
    ("机", "機"),
    ("杀", "殺"),
    ("杂", "雜"),
    ("权", "權"),
    ("条", "條"),
    ("来", "來"),
    ("杨", "楊"),
    ("构", "構"),
    ("枪", "槍"),
    ("柜", "櫃"),
    ("标", "標"),
    ("栋", "棟"),
    ("栏", "欄"),
    ("树", "樹"),
    ("样", "樣"),
    ("档", "檔"),
    ("桥", "橋"),
    ("梦", "夢"),
    ("检", "檢"),
    ("楼", "樓"),
    ("欢", "歡"),
    ("欧", "歐"),
    ("残", "殘"),
    ("毁", "毀"),
    ("毕", "畢"),
    ("气", "氣"),
    ("汇", "匯"),
    ("汉", "漢"),
    ("汤", "湯"),
    ("沟", "溝"),
    ("没", "沒"),
    ("沪", "滬"),
    ("泪", "淚"),
    ("泽", "澤"),
    ("洁", "潔"),
    ("浅", "淺"),
    ("测", "測"),
    ("济", "濟"),
    ("浏", "瀏"),
    ("浑", "渾"),
    ("浓", "濃"),
    ("涛", "濤"),
    ("润", "潤"),
    ("涨", "漲"),
    ("渐", "漸"),
    ("渔", "漁"),
    ("温", "溫"),
    ("湾", "灣"),
    ("湿", "濕"),
    ("溃", "潰"),
    ("满", "滿"),
    ("滚", "滾"),
    ("滞", "滯"),
    ("灭", "滅"),
    ("灯", "燈"),
    ("灵", "靈"),
    ("灾", "災"),
    ("烂", "爛"),
    ("烦", "煩"),
    ("烧", "燒"),
    ("热", "熱"),
    ("爱", "愛"),
    ("爷", "爺"),
    ("牵", "牽"),
    ("犹", "猶"),
    ("独", "獨"),
    ("狭", "狹"),
    ("狮", "獅"),
    ("猎", "獵"),
    ("猫", "貓"),
    ("献", "獻"),
    ("玛", "瑪"),
    ("环", "環"),
    ("现", "現"),
    ("琼", "瓊"),
    ("电", "電"),
    ("画", "畫"),
    ("畅", "暢"),
    ("疗", "療"),
    ("疯", "瘋"),
    ("皱", "皺"),
    ("盏", "盞"),
    ("盐", "鹽"),
    ("监", "監"),
    ("盖", "蓋"),
    ("盘", "盤"),
    ("睁", "睜"),
    ("矫", "矯"),
    ("码", "碼"),
    ("砖", "磚"),
    ("础", "礎"),
    ("硕", "碩"),
    ("确", "確"),
    ("碍", "礙"),
    ("礼", "禮"),
    ("祸", "禍"),
    ("离", "離"),
    ("种", "種"),
    ("积", "積"),
    ("称", "稱"),
    ("稳", "穩"),
    ("穷", "窮"),
    ("窃", "竊"),
    ("窝", "窩"),
    ("竖", "豎"),
    ("竞", "競"),
    ("笔", "筆"),
    ("筛", "篩"),
    ("筹", "籌"),
    ("签", "簽"),
    ("简", "簡"),
    ("篮", "籃"),
    ("类", "類"),
    ("粮", "糧"),
    ("紧", "緊"),
    ("网", "網"),
    ("罗", "羅"),
    ("罚", "罰"),
    ("罢", "罷"),
    ("羡", "羨"),
    ("联", "聯"),
    ("聋", "聾"),
    ("职", "職"),
    ("聪", "聰"),
    ("肃", "肅"),
    ("肠", "腸"),
    ("肤", "膚"),
    ("肿", "腫"),
    ("胀", "脹"),
    ("脑", "腦"),
    ("脚", "腳"),
    ("脸", "臉"),
    ("腾", "騰"),
    ("舰", "艦"),
    ("舱", "艙"),
    ("艰", "艱"),
    ("艺", "藝"),
    ("节", "節"),
    ("苏", "蘇"),
    ("药", "藥"),
    ("荣", "榮"),
    ("莱", "萊"),
    ("获", "獲"),
    ("萝", "蘿"),
    ("营", "營"),
    ("蒋", "蔣"),
    ("蓝", "藍"),
    ("虑", "慮"),
    ("虫", "蟲"),
    ("蚁", "蟻"),
    ("蛮", "蠻"),
    ("补", "補"),
    ("衬", "襯"),
    ("装", "裝"),
    ("裤", "褲"),
    ("见", "見"),
    ("观", "觀"),
    ("规", "規"),
    ("视", "視"),
    ("览", "覽"),
    ("觉", "覺"),
    ("誉", "譽"),
    ("贞", "貞"),
    ("赵", "趙"),
    ("趋", "趨"),
    ("跃", "躍"),
    ("践", "踐"),
    ("车", "車"),
    ("轨", "軌"),
    ("转", "轉"),
    ("轮", "輪"),
    ("软", "軟"),
    ("轻", "輕"),
    ("载", "載"),
    ("较", "較"),
    ("辅", "輔"),
    ("辆", "輛"),
    ("辈", "輩"),
    ("辉", "輝"),
    ("辞", "辭"),
    ("辩", "辯"),
    ("边", "邊"),
    ("辽", "遼"),
    ("达", "達"),
    ("迁", "遷"),
    ("过", "過"),
    ("迈", "邁"),
    ("运", "運"),
    ("还", "還"),
    ("这", "這"),
    ("进", "進"),
    ("远", "遠"),
    ("违", "違"),
    ("连", "連"),
    ("迟", "遲"),
    ("适", "適"),
    ("选", "選"),
    ("递", "遞"),
    ("逻", "邏"),
    ("遗", "遺"),
    ("邓", "鄧"),
    ("邮", "郵"),
    ("邻", "鄰"),
    ("郑", "鄭"),
    ("酱", "醬"),
    ("酿", "釀"),
    ("释", "釋"),
    ("长", "長"),
    ("队", "隊"),
    ("阳", "陽"),
    ("阴", "陰"),
    ("阵", "陣"),
    ("阶", "階"),
    ("际", "際"),
    ("陆", "陸"),
    ("陈", "陳"),
    ("险", "險"),
    ("随", "隨"),
    ("隐", "隱"),
    ("难", "難"),
    ("雾", "霧"),
    ("静", "靜"),
    ("韩", "韓"),
    ("风", "風"),
    ("飘", "飄"),
    ("飞", "飛"),
    ("饥", "飢"),
    ("饭", "飯"),
    ("饮", "飲"),
    ("饰", "飾"),
    ("饱", "飽"),
    ("饿", "餓"),
    ("馆", "館"),
    ("鱼", "魚"),
    ("鲁", "魯"),
    ("鲜", "鮮"),
    ("鸟", "鳥"),
    ("鸡", "雞"),
    ("鸣", "鳴"),
    ("鸭", "鴨"),
    ("鸿", "鴻"),
    ("麦", "麥"),
    ("黄", "黃"),
    ("齐", "齊"),
    ("齿", "齒"),
    ("龄", "齡"),
    ("龙", "龍"),
    ("龟", "龜"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_keys_unique() {
        let mut seen = HashSet::new();
        for (simplified, _) in BUILTIN_MAPPINGS {
            assert!(seen.insert(simplified), "duplicate key: {simplified}");
        }
    }

    #[test]
    fn test_table_has_no_noop_entries() {
        for (simplified, traditional) in BUILTIN_MAPPINGS {
            assert_ne!(simplified, traditional, "no-op entry: {simplified}");
        }
    }

    // Conversion is idempotent only if no mapping's output contains any
    // key: a surviving key would be rewritten again on a second pass.
    #[test]
    fn test_outputs_never_rematch_keys() {
        let keys: HashSet<&str> = BUILTIN_MAPPINGS.iter().map(|(s, _)| *s).collect();
        for (_, traditional) in BUILTIN_MAPPINGS {
            for key in &keys {
                assert!(
                    !traditional.contains(key),
                    "output {traditional} contains key {key}"
                );
            }
        }
    }
}
