//! An HDMI output pipeline: a Zynq PS, AXI plumbing, a DMA feeding a video
//! stream through width conversion and a clock-domain FIFO into a display
//! controller and HDMI transmitter.

/// IP-core specification files as `(file name, TOML)`, in catalog order.
pub const IP_CORES: [(&str, &str); 12] = [
    (
        "axi_dispctrl.toml",
        r#"
name = "axi_dispctrl"
description = "Display timing controller"

[[interfaces]]
name = "s_axil"
direction = "input"
type = "AXI4Lite"

[[interfaces]]
name = "s_axis"
direction = "input"
type = "AXI4Stream"

[[interfaces]]
name = "video"
direction = "output"
type = "video"

[[interfaces]]
name = "pxl_clk"
direction = "input"
width = 1
"#,
    ),
    (
        "clock_crossing.toml",
        r#"
name = "clock_crossing"

[[interfaces]]
name = "s_axi"
direction = "input"
type = "AXI4Lite"

[[interfaces]]
name = "m_axi"
direction = "output"
type = "AXI4Lite"

[[interfaces]]
name = "s_clk"
direction = "input"
width = 1

[[interfaces]]
name = "m_clk"
direction = "input"
width = 1
"#,
    ),
    (
        "dma_axi_in_axis_out.toml",
        r#"
name = "dma_axi_in_axis_out"
description = "Memory-to-stream DMA"

[[interfaces]]
name = "s_axil"
direction = "input"
type = "AXI4Lite"

[[interfaces]]
name = "m_axi"
direction = "output"
type = "AXI4"

[[interfaces]]
name = "m_axis"
direction = "output"
type = "AXI4Stream"

[[interfaces]]
name = "clk"
direction = "input"
width = 1
"#,
    ),
    (
        "hdmi_tx.toml",
        r#"
name = "hdmi_tx"

[[interfaces]]
name = "video"
direction = "input"
type = "video"

[[interfaces]]
name = "pix_clk"
direction = "input"
width = 1

[[interfaces]]
name = "pix5x_clk"
direction = "input"
width = 1

[[interfaces]]
name = "tmds_clk"
direction = "output"
width = 2

[[interfaces]]
name = "tmds_data"
direction = "output"
width = 6
"#,
    ),
    (
        "litex_mmcm.toml",
        r#"
name = "litex_mmcm"

[[interfaces]]
name = "clk100"
direction = "input"
width = 1

[[interfaces]]
name = "rst"
direction = "input"
width = 1

[[interfaces]]
name = "pix_clk"
direction = "output"
multi = true
width = 1

[[interfaces]]
name = "pix5x_clk"
direction = "output"
width = 1
"#,
    ),
    (
        "proc_sys_reset.toml",
        r#"
name = "proc_sys_reset"

[[interfaces]]
name = "slowest_sync_clk"
direction = "input"
width = 1

[[interfaces]]
name = "ext_reset_in"
direction = "input"
width = 1

[[interfaces]]
name = "peripheral_aresetn"
direction = "output"
multi = true
width = 1
"#,
    ),
    (
        "ps7.toml",
        r#"
name = "ps7"
description = "Zynq-7000 processing system"

[[interfaces]]
name = "m_axi_gp0"
direction = "output"
type = "AXI4"

[[interfaces]]
name = "s_axi_hp0"
direction = "input"
type = "AXI4"

[[interfaces]]
name = "fclk0"
direction = "output"
multi = true
width = 1

[[interfaces]]
name = "fclk_reset0_n"
direction = "output"
width = 1
"#,
    ),
    (
        "axi_axil_adapter.toml",
        r#"
name = "axi_axil_adapter"

[[interfaces]]
name = "s_axi"
direction = "input"
type = "AXI4"

[[interfaces]]
name = "m_axil"
direction = "output"
type = "AXI4Lite"
"#,
    ),
    (
        "axi_interconnect.toml",
        r#"
name = "axi_interconnect"

[[interfaces]]
name = "s_axi"
direction = "input"
type = "AXI4"

[[interfaces]]
name = "m_axi_0"
direction = "output"
type = "AXI4"

[[interfaces]]
name = "m_axi_1"
direction = "output"
type = "AXI4"

[[interfaces]]
name = "clk"
direction = "input"
width = 1

[[interfaces]]
name = "rst"
direction = "input"
width = 1
"#,
    ),
    (
        "axi_protocol_converter.toml",
        r#"
name = "axi_protocol_converter"

[[interfaces]]
name = "s_axi"
direction = "input"
type = "AXI4"

[[interfaces]]
name = "m_axi"
direction = "output"
type = "AXI4"
"#,
    ),
    (
        "axis_dwidth_converter.toml",
        r#"
name = "axis_dwidth_converter"

[[interfaces]]
name = "s_axis"
direction = "input"
type = "AXI4Stream"

[[interfaces]]
name = "m_axis"
direction = "output"
type = "AXI4Stream"
"#,
    ),
    (
        "axis_async_fifo.toml",
        r#"
name = "axis_async_fifo"

[[interfaces]]
name = "s_axis"
direction = "input"
type = "AXI4Stream"

[[interfaces]]
name = "m_axis"
direction = "output"
type = "AXI4Stream"

[[interfaces]]
name = "s_clk"
direction = "input"
width = 1

[[interfaces]]
name = "m_clk"
direction = "input"
width = 1
"#,
    ),
];

/// The design description wiring one instance of every IP core.
pub const DESIGN: &str = r#"
[[instances]]
name = "dispctrl0"
type = "axi_dispctrl"

[[instances]]
name = "clock_crossing0"
type = "clock_crossing"

[[instances]]
name = "dma0"
type = "dma_axi_in_axis_out"

[[instances]]
name = "hdmi0"
type = "hdmi_tx"

[[instances]]
name = "mmcm0"
type = "litex_mmcm"

[[instances]]
name = "reset0"
type = "proc_sys_reset"

[[instances]]
name = "ps7_0"
type = "ps7"

[[instances]]
name = "axil_adapter0"
type = "axi_axil_adapter"

[[instances]]
name = "interconnect0"
type = "axi_interconnect"

[[instances]]
name = "protocol_converter0"
type = "axi_protocol_converter"

[[instances]]
name = "dwidth0"
type = "axis_dwidth_converter"

[[instances]]
name = "fifo0"
type = "axis_async_fifo"

# Control path
[[connections]]
from = "ps7_0.m_axi_gp0"
to = "interconnect0.s_axi"

[[connections]]
from = "interconnect0.m_axi_0"
to = "protocol_converter0.s_axi"

[[connections]]
from = "protocol_converter0.m_axi"
to = "axil_adapter0.s_axi"

[[connections]]
from = "axil_adapter0.m_axil"
to = "dma0.s_axil"

[[connections]]
from = "interconnect0.m_axi_1"
to = "clock_crossing0.s_axi"

[[connections]]
from = "clock_crossing0.m_axi"
to = "dispctrl0.s_axil"

# Video path
[[connections]]
from = "dma0.m_axi"
to = "ps7_0.s_axi_hp0"

[[connections]]
from = "dma0.m_axis"
to = "dwidth0.s_axis"

[[connections]]
from = "dwidth0.m_axis"
to = "fifo0.s_axis"

[[connections]]
from = "fifo0.m_axis"
to = "dispctrl0.s_axis"

[[connections]]
from = "dispctrl0.video"
to = "hdmi0.video"

# Clocks and resets
[[connections]]
from = "ps7_0.fclk0"
to = "mmcm0.clk100"

[[connections]]
from = "ps7_0.fclk0"
to = "reset0.slowest_sync_clk"

[[connections]]
from = "ps7_0.fclk0"
to = "dma0.clk"

[[connections]]
from = "ps7_0.fclk0"
to = "interconnect0.clk"

[[connections]]
from = "ps7_0.fclk0"
to = "clock_crossing0.s_clk"

[[connections]]
from = "ps7_0.fclk0"
to = "fifo0.s_clk"

[[connections]]
from = "ps7_0.fclk_reset0_n"
to = "reset0.ext_reset_in"

[[connections]]
from = "reset0.peripheral_aresetn"
to = "interconnect0.rst"

[[connections]]
from = "reset0.peripheral_aresetn"
to = "mmcm0.rst"

[[connections]]
from = "mmcm0.pix_clk"
to = "hdmi0.pix_clk"

[[connections]]
from = "mmcm0.pix_clk"
to = "dispctrl0.pxl_clk"

[[connections]]
from = "mmcm0.pix_clk"
to = "fifo0.m_clk"

[[connections]]
from = "mmcm0.pix_clk"
to = "clock_crossing0.m_clk"

[[connections]]
from = "mmcm0.pix5x_clk"
to = "hdmi0.pix5x_clk"

[[externals]]
port = "hdmi_clk"
kind = "output"
endpoint = "hdmi0.tmds_clk"

[[externals]]
port = "hdmi_data"
kind = "output"
endpoint = "hdmi0.tmds_data"
"#;
