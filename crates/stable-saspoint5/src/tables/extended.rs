//! Double-double coefficient tables.
//!
//! Same segment layout as the native tables. Each coefficient keeps every
//! published decimal digit as an unevaluated `hi + lo` pair, so the extended
//! backend is not limited by the rounding of the native literals.

use stable_core::{DoubleDouble, Segment};

use super::{ExponentBand, PadeTable, QuantileTable};

const fn dd(hi: f64, lo: f64) -> DoubleDouble {
    DoubleDouble::new(hi, lo)
}

/// Density table over `|x|` with a `u^3`-scaled tail in `u = 1/sqrt(|x|)`.
pub static PDF: PadeTable<DoubleDouble> = PadeTable {
    segments: &[
        Segment {
            lower: dd(0.0, 0.0),
            upper: dd(0.125, 0.0),
            numer: &[
                dd(0.6366197723675814, -3.935688840385503e-17),
                dd(217.27569971351346, 1.3871263179630042e-15),
                dd(34906.316336134456, 1.967543301343918e-12),
                dd(3403329.0693269847, -5.35702214050293e-11),
                dd(219485577.04435745, -7.867299438476562e-09),
                dd(9660864359.487305, 9.3714e-07),
                dd(290571833690.383, 8.32653125e-06),
                dd(5830893155931.061, -0.000100045),
                dd(73791102271377.58, -0.0065484),
                dd(526757196603002.5, -0.023148),
                dd(1757803536830635.2, 0.0257),
                dd(1858830419421443.0, 0.06222),
                dd(419828222275972.7, 0.026319),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(341.2958710117791, 1.1152771948575973e-14),
                dd(54890.71348273491, 2.927625865650177e-12),
                dd(5366414.553244103, -1.264482452392578e-10),
                dd(348045461.0049604, -1.983249755859375e-08),
                dd(15492074734.970175, -6.357287109375e-07),
                dd(476490595358.64453, 1.154e-06),
                dd(10010482312840.273, 6.3e-05),
                dd(139703522470411.8, 0.005632),
                dd(1237248813341602.2, -0.04734),
                dd(6474375809211384.0, -0.40539),
                dd(1.776273182600376e+16, 0.4066),
                dd(2.0479281583253816e+16, -1.384),
                dd(7451025346386407.0, -0.18036),
                dd(368496090049571.2, -0.012973),
            ],
        },
        Segment {
            lower: dd(0.125, 0.0),
            upper: dd(0.25, 0.0),
            numer: &[
                dd(0.4356684017686232, -3.027555889134761e-18),
                dd(7.124773573896554, -3.6446042111880147e-16),
                dd(40.2466317948739, 4.1021018847711386e-16),
                dd(90.48884976282059, 3.0245352592632174e-15),
                dd(75.61753872886192, 4.8486808876544234e-15),
                dd(12.69502539996945, -4.288754551957361e-16),
                dd(-0.6593048021329333, -2.661053629861539e-17),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(19.86238180415451, 8.431991011612118e-16),
                dd(152.85638301763262, -6.718766173891723e-15),
                dd(570.7069021116597, 3.863672183340788e-14),
                dd(1064.5492768019792, 7.496966672569514e-14),
                dd(913.1603527497649, -2.3304553543418645e-14),
                dd(258.8724668372091, 9.288378778129817e-15),
            ],
        },
        Segment {
            lower: dd(0.25, 0.0),
            upper: dd(0.5, 0.0),
            numer: &[
                dd(0.29564544568174755, 1.471998008155427e-17),
                dd(2.237795375907916, -5.443614998473786e-18),
                dd(5.01302198171248, -7.767288001738489e-18),
                dd(2.7636313111634063, 9.603315098853781e-17),
                dd(0.11813485831107468, -4.9474546483882006e-18),
                dd(0.02002870834621394, -4.242900910601893e-19),
                dd(-0.007539798005553757, -4.243250265738803e-20),
                dd(0.0013729464877772952, 5.083780498937149e-20),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(10.287962621478167, -3.1008232273170726e-16),
                dd(38.51252745097846, 1.2607937606874854e-15),
                dd(61.847436736780026, -2.3499166142195463e-15),
                dd(37.71000500873025, -1.5845652332626282e-15),
                dd(5.418663607400664, -2.6797902265656738e-18),
            ],
        },
        Segment {
            lower: dd(0.5, 0.0),
            upper: dd(1.0, 0.0),
            numer: &[
                dd(0.17076240172520624, -1.2691430101609207e-17),
                dd(0.843343631021919, -3.21951155128933e-17),
                dd(1.3970381915256436, 8.729016911143436e-17),
                dd(0.875843324574692, 3.465405957977963e-17),
                dd(0.18619955244374756, 5.710467710499128e-18),
                dd(0.007358582801815799, -2.4045373095153065e-19),
                dd(-0.00010369360769426608, 2.7081666997944374e-22),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(6.733634409525573, 2.8232644479354844e-16),
                dd(17.42889666192093, -4.577805850446224e-16),
                dd(21.594326803508366, 9.922070175252855e-16),
                dd(12.981872698138186, -4.625783152369783e-16),
                dd(3.4070721142694604, -2.1845232473596464e-16),
                dd(0.28022901254172944, 1.904348094400496e-17),
            ],
        },
        Segment {
            lower: dd(1.0, 0.0),
            upper: dd(2.0, 0.0),
            numer: &[
                dd(0.08610714691260411, 5.52631606261172e-18),
                dd(0.16968958594624534, 9.859056441924884e-18),
                dd(0.10949483329189222, -6.4412172021287846e-18),
                dd(0.02766196224531306, 6.587146993840462e-19),
                dd(0.002449727480069131, -1.6824557365340312e-19),
                dd(4.098536057722884e-05, 6.487726067929102e-22),
                dd(-2.6356141515895485e-07, -1.718866894733415e-23),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(3.0408285601885625, -6.32083452287782e-17),
                dd(3.5255866332395627, -1.42910261997357e-16),
                dd(1.9479552307970143, -6.618927100156434e-18),
                dd(0.5239567334007454, -2.303904997661407e-17),
                dd(0.06194535975939989, -1.4772159434758039e-18),
                dd(0.0023106198419234774, 1.1822812155538235e-19),
            ],
        },
        Segment {
            lower: dd(2.0, 0.0),
            upper: dd(4.0, 0.0),
            numer: &[
                dd(0.03914285804965134, 1.757743982453458e-18),
                dd(0.04071624840347801, 1.2340081804725225e-18),
                dd(0.014334273334275309, -4.353160346508543e-19),
                dd(0.002016221781153947, -1.9102067516265924e-20),
                dd(0.00010064801346775774, -4.016119271670555e-21),
                dd(9.515450467508923e-07, 3.455259685927724e-23),
                dd(-3.5659894093643903e-09, -2.169556421311237e-26),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(1.6390443161718702, 8.030689179367386e-17),
                dd(1.0381200319667732, -6.898247427902883e-17),
                dd(0.31814431079021066, 8.396865343188867e-18),
                dd(0.04819301556156665, -1.3336661143696722e-18),
                dd(0.003254353915899414, -1.7900063704261603e-19),
                dd(7.016269571281816e-05, 2.427280676147064e-21),
            ],
        },
        Segment {
            lower: dd(4.0, 0.0),
            upper: dd(8.0, 0.0),
            numer: &[
                dd(0.016505738422126288, -1.1026572053552096e-18),
                dd(0.00805429762031496, -5.763634134322974e-19),
                dd(0.0013524923464785278, 6.32120979249713e-20),
                dd(9.186852526827868e-05, -4.038137125793088e-21),
                dd(2.234477909378066e-06, -1.0806870465693329e-22),
                dd(1.0317691611139508e-08, -4.467769079541794e-25),
                dd(-1.949131825924413e-11, 6.567562967520471e-28),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(0.810113554189626, 2.8659685147384185e-17),
                dd(0.25417532540996834, 2.302118019170128e-17),
                dd(0.0387119072807895, -1.161486887523628e-18),
                dd(0.0029252077016279246, -1.4146114126483543e-19),
                dd(9.890941305266844e-05, 4.913671306300965e-21),
                dd(1.0714851331107072e-06, -6.358315927627198e-24),
            ],
        },
        Segment {
            lower: dd(8.0, 0.0),
            upper: dd(16.0, 0.0),
            numer: &[
                dd(0.0066004481049729054, 1.2848903495652964e-19),
                dd(0.001593426449949503, -8.364275544218521e-20),
                dd(0.00013242970692296612, -6.18545919013061e-21),
                dd(4.453781369784359e-06, -2.929215642819441e-22),
                dd(5.364099581113946e-08, 1.160883016472967e-24),
                dd(1.2229378767991007e-10, -2.538554829535483e-28),
                dd(-1.1630044304416523e-13, 9.63494531745017e-30),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(0.4104464858030396, -1.272124318017892e-17),
                dd(0.06518873423998593, -3.1320604937075113e-18),
                dd(0.005021512253086439, 4.176194772905639e-19),
                dd(0.00019174117963955114, -4.239789354226091e-22),
                dd(3.273166003115982e-06, -7.785082429033887e-23),
                dd(1.7884030121310222e-08, -5.833547345154516e-25),
            ],
        },
        Segment {
            lower: dd(16.0, 0.0),
            upper: dd(32.0, 0.0),
            numer: &[
                dd(0.0025433946177795576, -1.6473386334682495e-19),
                dd(0.0003100695253578526, -2.1011200046405492e-20),
                dd(1.3008268279608574e-05, -6.85171412958426e-22),
                dd(2.2071586847925558e-07, 2.2787644260435635e-24),
                dd(1.3399665975602645e-09, 3.450713205023415e-27),
                dd(1.5350536046382798e-12, 1.0017574256360098e-28),
                dd(-7.426494163569655e-16, 2.972635743836481e-32),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(0.2092033844508598, -5.3909834314964245e-19),
                dd(0.01694226268976313, -1.0148403090791471e-18),
                dd(0.0006656490596706898, -3.8091779562895196e-20),
                dd(1.2965478566600985e-05, -3.460518015745359e-22),
                dd(1.1288613947456097e-07, 3.8075945632689756e-24),
                dd(3.144201048991704e-10, 2.031332024948326e-26),
            ],
        },
        Segment {
            lower: dd(32.0, 0.0),
            upper: dd(64.0, 0.0),
            numer: &[
                dd(0.0009550856950678836, -3.021425341189141e-20),
                dd(5.8612549673320275e-05, 5.814496939786744e-22),
                dd(1.2375397132581093e-06, -1.6528396164538483e-23),
                dd(1.0564381974593304e-08, 6.407819266176479e-25),
                dd(3.22502949410095e-11, 2.4936520714911576e-27),
                dd(1.8536614468015795e-14, -9.758751077336181e-31),
                dd(-4.539758073174031e-18, -3.84392185851168e-34),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(0.10598085038647483, 5.656860623859975e-19),
                dd(0.004349660426520001, -1.9640299482798363e-20),
                dd(8.663415383874465e-05, -4.839189967417035e-21),
                dd(8.556080822022361e-07, 1.961478498240976e-23),
                dd(3.777199683785093e-09, -3.151423984186516e-25),
                dd(5.332873615595717e-12, 4.523527635732498e-29),
            ],
        },
    ],
    tail: Segment {
        lower: dd(0.0, 0.0),
        upper: dd(0.125, 0.0),
        numer: &[
            dd(0.19947114020071635, -1.246160904135584e-17),
            dd(-0.019331009413143748, -6.444601997237085e-19),
            dd(-0.008442826143090732, 5.066601489419343e-19),
            dd(0.0034729602428235605, -1.1981246665250596e-19),
            dd(-0.0004053980116898219, -2.3090790820331638e-20),
        ],
        denom: &[
            dd(1.0, 0.0),
            dd(0.7009732512585772, 4.290567662487039e-18),
            dd(0.26696968125883574, -2.1695575544427964e-17),
            dd(0.05517851475036122, -2.4505777599219203e-18),
            dd(0.006501300309799663, -3.9734291222707163e-19),
        ],
    },
};

/// Upper-tail probability table over `x >= 0` with a `u`-scaled tail.
pub static CCDF: PadeTable<DoubleDouble> = PadeTable {
    segments: &[
        Segment {
            lower: dd(0.0, 0.0),
            upper: dd(0.5, 0.0),
            numer: &[
                dd(0.5, 0.0),
                dd(111.53008254958148, 6.991413716647774e-15),
                dd(11856.41675335235, 7.839473436832428e-13),
                dd(751503.7930777017, 2.699033630371094e-12),
                dd(30564823.367843848, 4.972848907470703e-10),
                dd(812176734.5300909, 2.901030224609375e-08),
                dd(13953318283.623451, -4.7561015625e-07),
                dd(150394359286.07797, 1.799890625e-06),
                dd(979057903542.9355, 2.8936e-05),
                dd(3738009928551.5015, -6.470375e-05),
                dd(8126970903294.329, -0.0004181325),
                dd(9631540586438.184, -0.00068505),
                dd(5777149040176.427, -0.0003360025),
                dd(1533219582520.9182, -5.6040625e-05),
                dd(136220966258.71822, -3.5833828125e-06),
                dd(1707666550.65405, 1.152493701171875e-07),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(224.33340464389815, -4.886613959141076e-15),
                dd(23998.4636687021, 1.2287973469495773e-12),
                dd(1533537.9143208687, -9.148304431915283e-11),
                dd(63076495.247986175, 2.5277231384277343e-09),
                dd(1704057691.693096, 5.24099072265625e-08),
                dd(30038122701.019527, 1.498797265625e-06),
                dd(337519046677.5074, 7.41309375e-06),
                dd(2350016105181.091, -0.0001871725),
                dd(9909619482007.678, -0.000940215),
                dd(24706667397854.484, -0.0015492),
                dd(35144259393288.26, -0.00066315),
                dd(26889143110611.773, -0.0001245),
                dd(9997234842535.824, 0.0007266),
                dd(1491902294092.3677, 5.033875e-05),
                dd(56875298014.6894, -2.18693828125e-06),
            ],
        },
        Segment {
            lower: dd(0.5, 0.0),
            upper: dd(1.0, 0.0),
            numer: &[
                dd(0.33130955000075807, 1.3967306802349282e-17),
                dd(1.6301216230762212, 7.836197491727304e-17),
                dd(2.9776316146724877, -8.591496453117579e-18),
                dd(2.4927794873957527, 2.1589984159259124e-16),
                dd(0.9496192623026496, -4.768442934491671e-18),
                dd(0.13836014898408758, 6.603347562092531e-18),
                dd(0.004008128640756523, 2.959666396579837e-19),
                dd(-4.8205197876596046e-05, -2.9865920942435966e-21),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(5.435653831280464, 4.060925062925834e-16),
                dd(11.326516067213014, -3.1247917453311386e-16),
                dd(11.335231624672643, 7.485620566395111e-16),
                dd(5.566714651704097, -1.2339684224941769e-16),
                dd(1.2101170838950148, -2.680343754054047e-17),
                dd(0.08346182828724288, 8.997989583542222e-19),
            ],
        },
        Segment {
            lower: dd(1.0, 0.0),
            upper: dd(2.0, 0.0),
            numer: &[
                dd(0.2712803126893433, -2.3761799748538993e-17),
                dd(0.7446108379741393, -4.5432154762313004e-17),
                dd(0.717844128359407, -4.7079559749411417e-17),
                dd(0.29878906094528884, 8.098981418590877e-18),
                dd(0.05227474114391023, -3.2654619549547555e-18),
                dd(0.0030644798443778642, 7.172457657227952e-20),
                dd(2.604070710210449e-05, -7.749393098066526e-23),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(3.062212575071883, -1.5003306723804213e-16),
                dd(3.448273722314723, 1.3952327876845375e-17),
                dd(1.7816611333893067, 3.4746981956993696e-17),
                dd(0.42558047849290725, -2.215239468176686e-17),
                dd(0.04099838477311285, 6.992760015412001e-19),
                dd(0.0010434317218346765, 1.6555792555536665e-20),
            ],
        },
        Segment {
            lower: dd(2.0, 0.0),
            upper: dd(4.0, 0.0),
            numer: &[
                dd(0.21392816227538372, -4.2244704941081e-18),
                dd(0.23513910923582818, 9.947627050939656e-18),
                dd(0.09359675151349327, 5.719662462284538e-18),
                dd(0.016431048959275385, 8.398119742733426e-19),
                dd(0.0012318672898921589, 1.4174528858808063e-20),
                dd(3.1350096926103255e-05, -1.0547622105778246e-21),
                dd(1.1702134675896598e-07, 3.1378869708509346e-24),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(1.2821218317782952, -9.297738802728243e-17),
                dd(0.6173210094068504, 2.449007285346277e-18),
                dd(0.13840031801931998, -1.3559764060733899e-17),
                dd(0.014499479453589684, -3.056812481289242e-19),
                dd(0.0006177744462825466, 3.6298374834241066e-20),
                dd(7.005210501692393e-06, -1.4059820645501406e-22),
            ],
        },
        Segment {
            lower: dd(4.0, 0.0),
            upper: dd(8.0, 0.0),
            numer: &[
                dd(0.1637728029790872, -1.6515281908240868e-18),
                dd(0.09690096039422143, -4.1843285796595094e-18),
                dd(0.020826172571982812, 1.631669823578099e-18),
                dd(0.0019796518269314697, -1.1097732569655617e-19),
                dd(8.054992735322042e-05, 4.502915222344364e-21),
                dd(1.1140197114577788e-06, -2.9985017193247194e-23),
                dd(2.259320827705887e-09, 1.364144274263648e-25),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(0.6924635638728656, -2.00438481533858e-17),
                dd(0.18072098716675597, 1.2622096834818891e-17),
                dd(0.022041664732453104, 1.336041750739717e-18),
                dd(0.0012605207014066307, -5.523723009374427e-20),
                dd(2.939675342658754e-05, 1.5652243347557776e-21),
                dd(1.8270699504225954e-07, 1.2577078047300108e-23),
            ],
        },
        Segment {
            lower: dd(8.0, 0.0),
            upper: dd(16.0, 0.0),
            numer: &[
                dd(0.12261012256487427, 6.23403644772846e-18),
                dd(0.037027322212157224, -5.871093291237078e-19),
                dd(0.004060836184617896, 3.2780586535934067e-19),
                dd(0.00019689813421593213, -8.54911490943116e-21),
                dd(4.08421066512187e-06, -3.5833095637810533e-22),
                dd(2.8770741985322624e-08, 9.551651598311455e-25),
                dd(2.968501261803877e-11, -2.8621000490591426e-27),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(0.35582519130136303, -7.184285255382769e-18),
                dd(0.04772517661760467, 2.0798309418380726e-18),
                dd(0.002991366051312261, 9.832466392761763e-20),
                dd(8.788957854323219e-05, 3.6601415289137586e-21),
                dd(1.052357706240065e-06, -4.362882627521779e-23),
                dd(3.354238777699135e-09, -1.265283571160217e-25),
            ],
        },
        Segment {
            lower: dd(16.0, 0.0),
            upper: dd(32.0, 0.0),
            numer: &[
                dd(0.0903056141356415, 3.404890827275638e-18),
                dd(0.013756890441765264, -8.61627512444093e-19),
                dd(0.0007609472713832475, -4.33185349786926e-20),
                dd(1.8604830296756008e-05, -1.4713186941931099e-21),
                dd(1.9453786049657543e-07, -6.873117416147976e-24),
                dd(6.905240939159963e-10, -1.843721245155692e-26),
                dd(3.5880843447781714e-13, -2.1996035163973815e-29),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(0.1805013477352723, -1.847200859459641e-18),
                dd(0.012280795828614693, 5.521878649237602e-19),
                dd(0.0003904215411152757, -2.0269124437848334e-20),
                dd(5.816694492349151e-06, -2.8491440720550566e-22),
                dd(3.530054156762018e-08, 9.604625452072865e-25),
                dd(5.698830254358739e-11, 7.073917136637706e-28),
            ],
        },
        Segment {
            lower: dd(32.0, 0.0),
            upper: dd(64.0, 0.0),
            numer: &[
                dd(0.06573335717669415, -4.146451882688655e-18),
                dd(0.00502795551798163, 4.1334799630754626e-19),
                dd(0.0001396336160379971, 1.1602765693459742e-20),
                dd(1.7138656463453386e-06, 9.548709075577615e-23),
                dd(8.995081563572471e-09, 6.615110072603134e-26),
                dd(1.6022946057229716e-11, -2.684549530441321e-28),
                dd(4.177117096229605e-15, 3.4023145195795283e-31),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(0.09101986373473683, -6.787545718402706e-18),
                dd(0.0031226347235757826, 1.3114540901729123e-20),
                dd(5.005247951303256e-05, 1.1380849117519665e-21),
                dd(3.759131887471497e-07, 8.609145195898249e-24),
                dd(1.1497013209889339e-09, 6.427811975594642e-26),
                dd(9.349571192713001e-13, -3.346348398019727e-29),
            ],
        },
    ],
    tail: Segment {
        lower: dd(0.0, 0.0),
        upper: dd(0.125, 0.0),
        numer: &[
            dd(0.3989422804014327, -2.492321808271168e-17),
            dd(0.08122223887836215, -4.146951633622003e-18),
            dd(0.01685157037072717, -5.343382143454815e-19),
            dd(0.002198016272053748, 1.065954636278635e-19),
            dd(-5.633217058549683e-05, 1.012921890825537e-21),
        ],
        denom: &[
            dd(1.0, 0.0),
            dd(0.6025362409027686, -2.4512775389887393e-17),
            dd(0.1992844714001211, -1.3515278215464786e-18),
            dd(0.034801257796175544, 9.433751937368187e-19),
            dd(0.003385450044730589, -1.2413122993394587e-19),
        ],
    },
};

/// Quantile table over `p <= 0.5`, binned on the base-2 exponent of `p`.
pub static QUANTILE: QuantileTable<DoubleDouble> = QuantileTable {
    head: &[
        Segment {
            lower: dd(0.0, 0.0),
            upper: dd(0.125, 0.0),
            numer: &[
                dd(0.0, 0.0),
                dd(0.13609913064397514, -8.778708910720597e-18),
                dd(21.963443449831153, -1.098184343079105e-15),
                dd(1702.769548483432, -9.754770529001951e-14),
                dd(80218.73417863544, -3.343751716041565e-12),
                dd(2487501.121984568, 1.755684105682373e-10),
                dd(52061785.83004432, 1.427868243408203e-09),
                dd(731202030.6851673, -9.1830703125e-09),
                dd(6660614031.383556, -4.46816796875e-07),
                dd(36568789272.55908, -6.3145e-07),
                dd(106061776220.3056, -7.53334375e-06),
                dd(123930642673.46147, -6.2116171875e-06),
                dd(14998640814.952013, -3.079470703125e-07),
                dd(-617325587.2193571, 9.01168212890625e-09),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(163.11114675382524, -1.0704176901854574e-14),
                dd(12786.446150968544, 8.817117236852646e-14),
                dd(610371.5332417992, 1.0388195812225341e-11),
                dd(19242211.59635077, 3.872220977783203e-10),
                dd(411544185.50225073, -2.1494363525390625e-08),
                dd(5953433029.92055, 2.7620548828125e-07),
                dd(56561585888.97584, -7.1281953125e-07),
                dd(330833154992.29315, -8.35246875e-06),
                dd(1060323921360.5421, -4.20978125e-05),
                dd(1500712820120.9546, -0.00011053375),
                dd(543552396263.9892, -1.634434375e-05),
                dd(95743491576.86609, 4.6332125e-06),
            ],
        },
        Segment {
            lower: dd(0.125, 0.0),
            upper: dd(0.25, 0.0),
            numer: &[
                dd(0.014669865074892024, 5.490926348107357e-19),
                dd(0.35838013178838557, -1.2486284439785639e-17),
                dd(3.391537500295532, -1.9141345094007907e-16),
                dd(15.545742487395728, -7.28051300573349e-16),
                dd(34.44038970396571, -1.031926499301195e-15),
                dd(30.188153196496298, -6.042532445928082e-16),
                dd(2.776790522946063, 2.08662967771017e-16),
                dd(-0.07766652882329725, 4.788160242981126e-18),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(17.25842803238762, -1.174981735568866e-15),
                dd(111.98351880014765, 5.280403190370649e-15),
                dd(325.96989305404816, -2.4810104786902666e-14),
                dd(391.97880968067204, 8.451855349153281e-15),
                dd(129.8742527207149, -9.142583310864866e-15),
                dd(20.87401145196101, -4.13317796446383e-17),
            ],
        },
        Segment {
            lower: dd(0.25, 0.0),
            upper: dd(0.5, 0.0),
            numer: &[
                dd(0.026962786668934646, -1.7156196298090973e-18),
                dd(0.32309118050744523, -1.3507808171432465e-17),
                dd(1.4216401953354987, -7.298616010416067e-17),
                dd(2.7461317082812, 2.2173735742148944e-16),
                dd(2.07865023346181, -1.3014167471402325e-17),
                dd(0.25326717686374084, 1.753049574531254e-17),
                dd(-0.025581625018630184, 2.830938919452863e-19),
                dd(0.0030268375047039836, -1.487239099547985e-19),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(8.55049920135376, -5.950458385296352e-16),
                dd(24.87261191390479, 1.5042206089794635e-16),
                dd(27.9519589592199, -1.6888980706710369e-15),
                dd(9.882129161618238, 8.162025318737328e-16),
                dd(1.3974941795625195, -1.8348051989581434e-17),
            ],
        },
        Segment {
            lower: dd(0.5, 0.0),
            upper: dd(1.0, 0.0),
            numer: &[
                dd(0.0479518653373241, 2.6822732166771514e-18),
                dd(0.38183712579376594, -2.2753303713731235e-17),
                dd(1.1337035370814632, 3.3998412447352895e-18),
                dd(1.5521814576218684, 3.2806081917751583e-17),
                dd(0.9609382711410365, 3.8803433661804304e-17),
                dd(0.2118117554644256, 7.412252242505201e-18),
                dd(0.008845339606039157, 3.961742664839572e-19),
                dd(0.0017331461457100916, -3.856805131729652e-20),
                dd(-3.63491208733877e-05, 3.240825031152475e-21),
            ],
            denom: &[
                dd(1.0, 0.0),
                dd(6.369544630002537, 4.312116828492284e-16),
                dd(14.060189730683314, 6.367512738182209e-16),
                dd(13.383807510691666, 8.543032453713008e-16),
                dd(5.60958095533108, 7.43785711628478e-17),
                dd(1.1179603562337521, -1.5385426657164935e-17),
                dd(0.11250848263748886, 8.148437253135489e-19),
                dd(0.005185039759497997, -8.808301025932008e-20),
            ],
        },
    ],
    bands: &[
        ExponentBand {
            min_exponent: -4,
            rescale: 2,
            segment: Segment {
                lower: dd(0.0, 0.0),
                upper: dd(2.0, 0.0),
                numer: &[
                    dd(0.08023954844933298, 2.2267628529362498e-18),
                    dd(0.24613293306835127, 7.341395411550068e-18),
                    dd(0.28182017686711924, -1.1990508451470873e-17),
                    dd(0.14775406102837102, 6.0449621960324e-18),
                    dd(0.0354638964490281, 1.219562917933677e-18),
                    dd(0.0039999873009339375, 2.644090782058824e-19),
                    dd(0.00038158192843482704, -2.9441234203047208e-21),
                    dd(1.8252092015435423e-05, -7.476293223212408e-22),
                    dd(-2.0615139674569034e-07, -1.1630652509026501e-23),
                    dd(6.7798654813801134e-09, 3.1894012791287805e-26),
                ],
                denom: &[
                    dd(1.0, 0.0),
                    dd(2.3924432903783, 9.775777413750999e-17),
                    dd(2.1268346541637664, -1.7150358493738808e-16),
                    dd(0.9026122723345544, 2.4849836215518413e-17),
                    dd(0.2066679591914888, 6.090997068496712e-18),
                    dd(0.02793289685252579, -1.5185808844608967e-18),
                    dd(0.002282162862165379, -1.2685691074961948e-19),
                    dd(0.00010419569053143776, 4.428844540639742e-21),
                ],
            },
        },
        ExponentBand {
            min_exponent: -8,
            rescale: 4,
            segment: Segment {
                lower: dd(0.0, 0.0),
                upper: dd(4.0, 0.0),
                numer: &[
                    dd(0.13929349326619556, 5.828772533859592e-18),
                    dd(0.1267413809386617, 8.44917611047451e-19),
                    dd(0.043111704030720024, 2.1544279444332873e-18),
                    dd(0.007505282692694981, 1.2845503695744286e-19),
                    dd(0.0008631004971785703, -2.9859333807034697e-20),
                    dd(6.75686286034522e-05, 2.818927295025619e-21),
                    dd(3.1110262547312076e-06, 7.260021802682635e-23),
                    dd(9.635136553999801e-08, -2.6726190801386007e-24),
                    dd(-6.402236090130053e-11, -3.634731179286823e-27),
                ],
                denom: &[
                    dd(1.0, 0.0),
                    dd(0.811234548272889, -4.138511026641238e-17),
                    dd(0.2635255169917538, 2.6496140555384218e-17),
                    dd(0.04771182265331473, -1.606435684472756e-18),
                    dd(0.00546090741266889, -4.9837890460799975e-20),
                    dd(0.000415325425646862, 5.634477093078817e-21),
                    dd(2.0237768199844238e-05, 7.833786737282012e-22),
                    dd(5.798233111548761e-07, -6.745111924073243e-24),
                ],
            },
        },
        ExponentBand {
            min_exponent: -16,
            rescale: 8,
            segment: Segment {
                lower: dd(0.0, 0.0),
                upper: dd(8.0, 0.0),
                numer: &[
                    dd(0.15791166061303777, -8.45062920299155e-18),
                    dd(0.05597409556950992, 2.0896408545547486e-18),
                    dd(0.008928958540085604, 2.874581415427946e-19),
                    dd(0.0008887952992738558, 4.636258400199506e-20),
                    dd(5.663583355966077e-05, 2.3496005436838574e-21),
                    dd(2.4673319525394155e-06, 1.9163828854081592e-22),
                    dd(6.448298701818258e-08, 4.364569470802718e-24),
                    dd(7.621932428643804e-10, 7.417829319120313e-27),
                    dd(-7.820354133316999e-14, -1.414643541344913e-30),
                ],
                denom: &[
                    dd(1.0, 0.0),
                    dd(0.3490077825660026, -1.4710420116477181e-18),
                    dd(0.056530370287626044, 2.2874066292558563e-20),
                    dd(0.005543164426618013, -2.222761848440916e-19),
                    dd(0.0003584989955017032, 2.2070841931383344e-20),
                    dd(1.5387291396833634e-05, -2.0109069699616158e-22),
                    dd(4.0851215232648257e-07, 3.101506790122532e-24),
                    dd(4.7295961575647085e-09, -1.9279896394519322e-25),
                ],
            },
        },
        ExponentBand {
            min_exponent: -32,
            rescale: 16,
            segment: Segment {
                lower: dd(0.0, 0.0),
                upper: dd(16.0, 0.0),
                numer: &[
                    dd(0.15915008607023456, -1.229274018407683e-18),
                    dd(0.06071440025069111, 3.0465249392359866e-18),
                    dd(0.011002644372389174, 6.243270407396194e-20),
                    dd(0.0012489273920933239, 9.589868655187409e-20),
                    dd(9.829225186551713e-05, -3.0528369630555312e-21),
                    dd(5.583668375263472e-06, 3.494541281659024e-22),
                    dd(2.290054086475802e-07, -1.8790200368064964e-24),
                    dd(6.443257183175183e-09, 3.422557684420867e-25),
                    dd(1.0511036131623006e-10, -2.611578741737478e-27),
                    dd(1.4808345062943286e-18, -5.806915641432738e-35),
                ],
                denom: &[
                    dd(1.0, 0.0),
                    dd(0.3814703159773412, -8.870318755837274e-18),
                    dd(0.0691330250512168, -3.4629169539712485e-18),
                    dd(0.007847122091825877, 6.293322990493903e-19),
                    dd(0.0006175954796768211, 5.1334422540084516e-20),
                    dd(3.508293611790412e-05, -8.824286409148389e-22),
                    dd(1.438891530715715e-06, 7.239954214312844e-23),
                    dd(4.0484025488823586e-08, 1.987194763518832e-24),
                    dd(6.604296364070451e-10, -1.906410798618582e-26),
                ],
            },
        },
        ExponentBand {
            min_exponent: -64,
            rescale: 32,
            segment: Segment {
                lower: dd(0.0, 0.0),
                upper: dd(32.0, 0.0),
                numer: &[
                    dd(0.15915494301778302, 7.978966680056125e-18),
                    dd(0.0691506515614472, 5.238001755218429e-18),
                    dd(0.014459018611115593, 6.614178161929129e-19),
                    dd(0.0019261613832772403, -5.565942021747142e-21),
                    dd(0.0001796401479067757, -2.820772222997044e-21),
                    dd(1.3085253507063983e-05, 3.0276857915478625e-22),
                    dd(5.552596578840383e-07, -2.0824286435484484e-23),
                    dd(3.50107118687545e-08, 8.648041593824376e-25),
                    dd(-1.471025929337296e-22, -1.8345264669555087e-39),
                ],
                denom: &[
                    dd(1.0, 0.0),
                    dd(0.4344863577523305, -2.0251480694258004e-17),
                    dd(0.0908486933075321, -5.629218572805688e-18),
                    dd(0.01210242890172433, -3.406886396694048e-19),
                    dd(0.0011287123379477753, -6.262023839996036e-21),
                    dd(8.221707257517768e-05, -6.596345788355238e-21),
                    dd(3.488799324106501e-06, 1.2935031587397722e-22),
                    dd(2.1997879040745198e-07, 4.308327930725446e-24),
                ],
            },
        },
    ],
};
